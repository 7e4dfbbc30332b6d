//! Core types for intlgen.
//! Loaders build these; the emitter reads them.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{
    error::Error, escape::escape_key, placeholder::extract_placeholders, traits::ModelFile,
};

impl ModelFile for ResourceCollection {
    fn normalize(&mut self) {
        self.fill_derived_fields();
    }
}

/// A language identifier optionally refined by a region (country) and/or a script subtag.
///
/// The string form is `language[_script][_country]`, e.g. `en`, `de_AT`, `zh_Hans_CN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    /// The language code (e.g. "en", "zh").
    pub language: String,

    /// The region code (e.g. "US", "AT").
    pub country: Option<String>,

    /// The script code (e.g. "Hans", "Latn").
    pub script: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>) -> Self {
        Locale {
            language: language.into(),
            country: None,
            script: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "_{}", script)?;
        }
        if let Some(country) = &self.country {
            write!(f, "_{}", country)?;
        }
        Ok(())
    }
}

impl Ord for Locale {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string()).then_with(|| {
            (&self.language, &self.script, &self.country).cmp(&(
                &other.language,
                &other.script,
                &other.country,
            ))
        })
    }
}

impl PartialOrd for Locale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts both `zh-Hans-CN` and `zh_Hans_CN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang_id: LanguageIdentifier = s
            .trim()
            .replace('_', "-")
            .parse()
            .map_err(|_| Error::InvalidLocale(s.to_string()))?;

        Ok(Locale {
            language: lang_id.language.as_str().to_string(),
            country: lang_id.region.map(|r| r.as_str().to_string()),
            script: lang_id.script.map(|s| s.as_str().to_string()),
        })
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.to_string()
    }
}

/// A single translatable string within one locale's table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringResource {
    /// Source identifier of the string.
    pub key: String,

    /// Identifier derived from `key`, used as the generated accessor name.
    #[serde(default)]
    pub escaped_key: String,

    /// Placeholder names in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub placeholders: Vec<String>,

    /// The translated text.
    pub value: String,
}

impl StringResource {
    /// Creates a resource, deriving its escaped key and placeholders from `key` and `value`.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        StringResource {
            escaped_key: escape_key(&key),
            placeholders: extract_placeholders(&value),
            key,
            value,
        }
    }

    /// Shape of the accessor generated for this resource.
    pub fn shape(&self) -> AccessorShape<'_> {
        if self.placeholders.is_empty() {
            AccessorShape::Plain
        } else {
            AccessorShape::Parameterized(&self.placeholders)
        }
    }
}

impl Display for StringResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StringResource {{ key: {}, accessor: {}, value: {} }}",
            self.key, self.escaped_key, self.value
        )
    }
}

/// Whether an accessor is a zero-argument getter or takes one argument per placeholder.
///
/// Both the accessor and the dispatch emitters consume this, so the call a dispatch
/// branch makes always matches the accessor's declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorShape<'a> {
    Plain,
    Parameterized(&'a [String]),
}

impl<'a> AccessorShape<'a> {
    /// Placeholder names, empty for `Plain`.
    pub fn params(&self) -> &'a [String] {
        match self {
            AccessorShape::Plain => &[],
            AccessorShape::Parameterized(params) => params,
        }
    }
}

/// One locale and all of its string resources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleTable {
    pub locale: Locale,

    /// Resources in table order, unique by key.
    #[serde(default)]
    pub resources: Vec<StringResource>,
}

impl LocaleTable {
    pub fn new(locale: Locale) -> Self {
        LocaleTable {
            locale,
            resources: Vec::new(),
        }
    }

    /// Appends a resource built with [`StringResource::new`].
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.resources.push(StringResource::new(key, value));
        self
    }

    pub fn find(&self, key: &str) -> Option<&StringResource> {
        self.resources.iter().find(|r| r.key == key)
    }
}

/// Every locale table plus the default locale.
///
/// The table of the default locale is authoritative for which keys exist and
/// which placeholders each key takes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceCollection {
    pub default_locale: Locale,

    /// All tables, default included, in collection order.
    pub tables: Vec<LocaleTable>,
}

impl ResourceCollection {
    pub fn new(default_locale: Locale, tables: Vec<LocaleTable>) -> Self {
        ResourceCollection {
            default_locale,
            tables,
        }
    }

    /// The default locale's table.
    pub fn default_values(&self) -> Option<&LocaleTable> {
        self.table(&self.default_locale)
    }

    pub fn table(&self, locale: &Locale) -> Option<&LocaleTable> {
        self.tables.iter().find(|t| &t.locale == locale)
    }

    /// Distinct locales in collection order.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            if !locales.contains(&&table.locale) {
                locales.push(&table.locale);
            }
        }
        locales
    }

    /// Derives `escaped_key` and `placeholders` for resources that left them empty.
    pub fn fill_derived_fields(&mut self) {
        for table in &mut self.tables {
            for resource in &mut table.resources {
                if resource.escaped_key.is_empty() {
                    resource.escaped_key = escape_key(&resource.key);
                }
                if resource.placeholders.is_empty() {
                    resource.placeholders = extract_placeholders(&resource.value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> ResourceCollection {
        ResourceCollection::new(
            Locale::new("en"),
            vec![
                LocaleTable::new(Locale::new("en"))
                    .with_string("hello", "Hello")
                    .with_string("greeting", "Hi {name}"),
                LocaleTable::new(Locale::new("de").with_country("AT")).with_string("hello", "Servus"),
            ],
        )
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::new("en").to_string(), "en");
        assert_eq!(Locale::new("de").with_country("AT").to_string(), "de_AT");
        assert_eq!(Locale::new("zh").with_script("Hans").to_string(), "zh_Hans");
        assert_eq!(
            Locale::new("zh").with_script("Hans").with_country("CN").to_string(),
            "zh_Hans_CN"
        );
    }

    #[test]
    fn test_locale_from_str() {
        let locale: Locale = "zh-Hans-CN".parse().unwrap();
        assert_eq!(locale.language, "zh");
        assert_eq!(locale.script.as_deref(), Some("Hans"));
        assert_eq!(locale.country.as_deref(), Some("CN"));

        let locale: Locale = "de_AT".parse().unwrap();
        assert_eq!(locale, Locale::new("de").with_country("AT"));
    }

    #[test]
    fn test_locale_from_str_invalid() {
        assert!(matches!(
            "not-a-language".parse::<Locale>(),
            Err(Error::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_locale_ordering_by_string_form() {
        let mut locales = vec![
            Locale::new("fr"),
            Locale::new("de").with_country("AT"),
            Locale::new("de"),
            Locale::new("en"),
        ];
        locales.sort();
        let names: Vec<String> = locales.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["de", "de_AT", "en", "fr"]);
    }

    #[test]
    fn test_locale_serde_as_string() {
        let locale = Locale::new("pt").with_country("BR");
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"pt_BR\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }

    #[test]
    fn test_string_resource_new_derives_fields() {
        let resource = StringResource::new("welcome_message", "Welcome {user}, {count} new");
        assert_eq!(resource.escaped_key, "welcomeMessage");
        assert_eq!(resource.placeholders, vec!["user", "count"]);
    }

    #[test]
    fn test_string_resource_shape() {
        let plain = StringResource::new("hello", "Hello");
        assert_eq!(plain.shape(), AccessorShape::Plain);
        assert!(plain.shape().params().is_empty());

        let param = StringResource::new("greeting", "Hi {name}");
        assert_eq!(param.shape().params(), &["name".to_string()]);
    }

    #[test]
    fn test_locale_table_find() {
        let table = LocaleTable::new(Locale::new("en")).with_string("hello", "Hello");
        assert_eq!(table.find("hello").unwrap().value, "Hello");
        assert!(table.find("missing").is_none());
    }

    #[test]
    fn test_collection_default_values() {
        let collection = sample_collection();
        let defaults = collection.default_values().unwrap();
        assert_eq!(defaults.locale, Locale::new("en"));
        assert_eq!(defaults.resources.len(), 2);
    }

    #[test]
    fn test_collection_locales_distinct_in_order() {
        let mut collection = sample_collection();
        collection
            .tables
            .push(LocaleTable::new(Locale::new("en")).with_string("hello", "Hello again"));
        let locales: Vec<String> = collection.locales().iter().map(|l| l.to_string()).collect();
        assert_eq!(locales, vec!["en", "de_AT"]);
    }

    #[test]
    fn test_collection_load_fills_derived_fields() {
        let json = r#"{
            "default_locale": "en",
            "tables": [
                { "locale": "en", "resources": [
                    { "key": "item_count", "value": "{count} items" }
                ] }
            ]
        }"#;
        let collection = ResourceCollection::from_json(json).unwrap();
        let resource = &collection.tables[0].resources[0];
        assert_eq!(resource.escaped_key, "itemCount");
        assert_eq!(resource.placeholders, vec!["count"]);
    }

    #[test]
    fn test_collection_json_roundtrip() {
        let collection = sample_collection();
        let mut writer = Vec::new();
        collection.to_json_writer(&mut writer).unwrap();

        let parsed = ResourceCollection::from_json_reader(writer.as_slice()).unwrap();
        assert_eq!(parsed, collection);
    }
}
