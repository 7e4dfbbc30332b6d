//! Dart class emitter.
//!
//! Turns a [`ResourceCollection`] into the source of one Dart class exposing an
//! accessor per default-locale key, the supported locales, and a dispatch
//! method resolving keys at runtime. Generation is pure: the same collection
//! always yields byte-identical source.

pub mod accessors;
pub mod dispatch;
pub mod locales;

use indoc::indoc;
use serde::{Deserialize, Serialize};

use crate::{
    coverage::MissingTranslation,
    error::Error,
    escape::escape_parameter,
    placeholder::is_placeholder_name,
    types::{LocaleTable, ResourceCollection, StringResource},
};

pub use accessors::MISSING_TRANSLATION_MARKER;
pub use locales::locale_literal;

/// Names used in the generated class. Every field has a default, so a partial
/// configuration table deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmitterOptions {
    /// Name of the generated class.
    pub class_name: String,

    /// Type of the optional override consulted before the default lookup.
    pub custom_lookup_type: String,

    /// Type of the mandatory default lookup.
    pub default_lookup_type: String,

    /// Name of the generated key-to-string dispatch method.
    pub dispatch_method: String,

    /// Import URIs written at the top of the file.
    pub imports: Vec<String>,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        EmitterOptions {
            class_name: "S".to_string(),
            custom_lookup_type: "CustomLookup".to_string(),
            default_lookup_type: "DefaultLookup".to_string(),
            dispatch_method: "getString".to_string(),
            imports: vec!["package:flutter/widgets.dart".to_string()],
        }
    }
}

impl EmitterOptions {
    /// Member names the generated class declares or inherits from `Object`,
    /// besides its accessors.
    pub fn reserved_members(&self) -> Vec<&str> {
        vec![
            self.class_name.as_str(),
            self.dispatch_method.as_str(),
            "customLookup",
            "defaultLookup",
            "defaultLocale",
            "supportedLocales",
            "isSupported",
            "_nonEmpty",
            "hashCode",
            "noSuchMethod",
            "runtimeType",
            "toString",
        ]
    }
}

/// The result of one emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub class_name: String,

    /// Complete Dart source of the class, newline-terminated.
    pub source: String,

    pub accessor_count: usize,

    /// Every (key, locale) pair documented with the missing-translation marker.
    pub missing: Vec<MissingTranslation>,
}

/// Emits the localization class for a resource collection.
///
/// # Example
///
/// ```rust
/// use intlgen::{ClassEmitter, Locale, LocaleTable, ResourceCollection};
///
/// let collection = ResourceCollection::new(
///     Locale::new("en"),
///     vec![LocaleTable::new(Locale::new("en")).with_string("hello", "Hello")],
/// );
/// let generated = ClassEmitter::default().emit(&collection)?;
/// assert!(generated.source.contains("static String get hello =>"));
/// # Ok::<(), intlgen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassEmitter {
    options: EmitterOptions,
}

impl ClassEmitter {
    pub fn new(options: EmitterOptions) -> Self {
        ClassEmitter { options }
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Generates the class source.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingDefaultTable` if no table carries the default locale,
    /// and `Error::DuplicateAccessor` or `Error::ReservedAccessor` if two default keys
    /// (or a key and a class member) share an accessor name.
    #[tracing::instrument(skip_all, fields(class = %self.options.class_name, tables = collection.tables.len()))]
    pub fn emit(&self, collection: &ResourceCollection) -> Result<GeneratedClass, Error> {
        let defaults = collection
            .default_values()
            .ok_or_else(|| Error::MissingDefaultTable(collection.default_locale.to_string()))?;
        self.validate(defaults)?;

        let class_name = &self.options.class_name;
        let mut source = String::new();
        source.push_str(&self.header());
        source.push_str(&format!("class {} {{\n", class_name));

        let accessors = accessors::emit_accessors(collection, defaults);
        let sections = [
            self.members(collection),
            accessors.source.clone(),
            dispatch::emit_dispatch(defaults, &self.options),
        ];
        let body = sections
            .iter()
            .filter(|section| !section.is_empty())
            .map(|section| indent(section))
            .collect::<Vec<_>>()
            .join("\n");
        source.push_str(&body);
        source.push_str("}\n");

        tracing::debug!(
            accessors = defaults.resources.len(),
            missing = accessors.missing.len(),
            "emitted class"
        );

        Ok(GeneratedClass {
            class_name: class_name.clone(),
            source,
            accessor_count: defaults.resources.len(),
            missing: accessors.missing,
        })
    }

    /// Checks that every default key maps to its own accessor name and declares
    /// placeholders that can become distinct parameters.
    pub fn validate(&self, defaults: &LocaleTable) -> Result<(), Error> {
        let reserved = self.options.reserved_members();

        for (i, resource) in defaults.resources.iter().enumerate() {
            if reserved.contains(&resource.escaped_key.as_str()) {
                tracing::debug!(key = %resource.key, "accessor collides with a class member");
                return Err(Error::ReservedAccessor {
                    escaped_key: resource.escaped_key.clone(),
                    key: resource.key.clone(),
                });
            }
            if let Some(earlier) = defaults.resources[..i]
                .iter()
                .find(|r| r.escaped_key == resource.escaped_key)
            {
                tracing::debug!(key = %resource.key, "duplicate accessor");
                return Err(Error::DuplicateAccessor {
                    escaped_key: resource.escaped_key.clone(),
                    first: earlier.key.clone(),
                    second: resource.key.clone(),
                });
            }
            validate_placeholders(resource)?;
        }
        Ok(())
    }

    fn header(&self) -> String {
        let mut header = String::from(indoc! {"
            // GENERATED CODE - DO NOT MODIFY BY HAND
            // ignore_for_file: non_constant_identifier_names, lines_longer_than_80_chars

        "});
        for import in &self.options.imports {
            header.push_str(&format!("import '{}';\n", import));
        }
        if !self.options.imports.is_empty() {
            header.push('\n');
        }
        header
    }

    /// Constructor, lookup fields and locale helpers.
    fn members(&self, collection: &ResourceCollection) -> String {
        format!(
            indoc! {"
                {class}._();

                static {custom}? customLookup;

                static {default_type} defaultLookup = {default_type}();

                static const Locale defaultLocale = {default_locale};

                {supported}
                static bool isSupported(Locale locale) => supportedLocales.any(
                      (supported) =>
                          supported.languageCode == locale.languageCode &&
                          (supported.scriptCode == null ||
                              supported.scriptCode == locale.scriptCode) &&
                          (supported.countryCode == null ||
                              supported.countryCode == locale.countryCode),
                    );

                static String? _nonEmpty(String? value) =>
                    value == null || value.isEmpty ? null : value;
            "},
            class = self.options.class_name,
            custom = self.options.custom_lookup_type,
            default_type = self.options.default_lookup_type,
            default_locale = locale_literal(&collection.default_locale),
            supported = locales::emit_supported_locales(collection),
        )
    }
}

fn validate_placeholders(resource: &StringResource) -> Result<(), Error> {
    let mut parameters: Vec<String> = Vec::with_capacity(resource.placeholders.len());
    for name in &resource.placeholders {
        if !is_placeholder_name(name) {
            return Err(Error::InvalidPlaceholder {
                key: resource.key.clone(),
                name: name.clone(),
            });
        }
        let parameter = escape_parameter(name);
        if parameters.contains(&parameter) {
            return Err(Error::DuplicatePlaceholder {
                key: resource.key.clone(),
                name: parameter,
            });
        }
        parameters.push(parameter);
    }
    Ok(())
}

/// Indents every non-empty line by one level (two spaces).
fn indent(block: &str) -> String {
    let mut out = String::with_capacity(block.len() + block.len() / 8);
    for line in block.lines() {
        if !line.is_empty() {
            out.push_str("  ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
