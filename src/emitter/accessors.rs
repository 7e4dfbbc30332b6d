//! Accessors and their translation-table documentation.

use crate::{
    coverage::MissingTranslation,
    escape::{doc_string_literal, escape_parameter},
    types::{AccessorShape, Locale, LocaleTable, ResourceCollection, StringResource},
};

/// Shown in a documentation row whose locale has no translation for the key.
pub const MISSING_TRANSLATION_MARKER: &str = "⚠️ missing translation";

/// Accessor source for a whole default table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmittedAccessors {
    pub source: String,
    pub missing: Vec<MissingTranslation>,
}

/// Emits a documented accessor for every resource of `defaults`, in table order.
pub fn emit_accessors(collection: &ResourceCollection, defaults: &LocaleTable) -> EmittedAccessors {
    let order = documentation_order(collection);
    let mut blocks = Vec::with_capacity(defaults.resources.len());
    let mut missing = Vec::new();

    for resource in &defaults.resources {
        let (doc, missing_locales) = emit_documentation(collection, &order, &resource.key);
        for locale in missing_locales {
            tracing::debug!(key = %resource.key, locale = %locale, "missing translation");
            missing.push(MissingTranslation {
                key: resource.key.clone(),
                locale: locale.clone(),
            });
        }
        blocks.push(format!("{}{}", doc, emit_accessor(resource)));
    }

    EmittedAccessors {
        source: blocks.join("\n"),
        missing,
    }
}

/// Row order of documentation tables: the default locale first, then the remaining
/// locales alphabetically by string form.
pub fn documentation_order(collection: &ResourceCollection) -> Vec<&Locale> {
    let (mut order, mut others): (Vec<&Locale>, Vec<&Locale>) = collection
        .locales()
        .into_iter()
        .partition(|locale| **locale == collection.default_locale);
    others.sort();
    order.append(&mut others);
    order
}

/// Renders the translation table for `key`, one row per locale in `order`.
///
/// Returns the doc comment and the locales whose table lacks `key`.
pub fn emit_documentation<'a>(
    collection: &ResourceCollection,
    order: &[&'a Locale],
    key: &str,
) -> (String, Vec<&'a Locale>) {
    let mut doc = String::from("/// | Locale | Translation |\n/// | :----- | :---------- |\n");
    let mut missing = Vec::new();

    for &locale in order {
        let cell = match collection.table(locale).and_then(|t| t.find(key)) {
            Some(resource) => doc_string_literal(&resource.value),
            None => {
                missing.push(locale);
                MISSING_TRANSLATION_MARKER.to_string()
            }
        };
        doc.push_str(&format!("/// | `{}` | {} |\n", locale, cell));
    }

    (doc, missing)
}

/// Emits the accessor for one resource.
///
/// The custom lookup wins when it yields a non-empty string; otherwise the default
/// lookup answers with the same arguments.
pub fn emit_accessor(resource: &StringResource) -> String {
    let name = &resource.escaped_key;
    match resource.shape() {
        AccessorShape::Plain => format!(
            "static String get {name} =>\n    _nonEmpty(customLookup?.{name}) ?? defaultLookup.{name};\n",
        ),
        AccessorShape::Parameterized(params) => {
            let names: Vec<String> = params.iter().map(|p| escape_parameter(p)).collect();
            let declared = names
                .iter()
                .map(|p| format!("String {}", p))
                .collect::<Vec<_>>()
                .join(", ");
            let args = names.join(", ");
            format!(
                "static String {name}({declared}) =>\n    _nonEmpty(customLookup?.{name}({args})) ?? defaultLookup.{name}({args});\n",
            )
        }
    }
}
