//! Reference runtime for the generated class.
//!
//! Mirrors what the emitted Dart code does at runtime so translations can be
//! previewed (and the generated semantics tested) without a Dart toolchain:
//! accessors resolve through a [`LayeredLookup`], and [`Dispatcher`] plays the
//! role of the generated dispatch method.

use std::collections::HashMap;

use crate::{placeholder::substitute_placeholders, types::LocaleTable};

/// A resolver from key and positional placeholder values to a string.
pub trait Lookup {
    /// Returns `None` when this lookup has nothing for `key`.
    fn lookup(&self, key: &str, args: &[&str]) -> Option<String>;
}

impl<F> Lookup for F
where
    F: Fn(&str, &[&str]) -> Option<String>,
{
    fn lookup(&self, key: &str, args: &[&str]) -> Option<String> {
        self(key, args)
    }
}

/// Resolves keys from one locale table, substituting `{name}` placeholders.
///
/// Positional arguments follow the accessor signature, which the default table
/// fixes. A translation may use its placeholders in another order, so values are
/// bound by the default resource's placeholder names.
#[derive(Debug, Clone, Copy)]
pub struct TableLookup<'a> {
    table: &'a LocaleTable,
    signatures: &'a LocaleTable,
}

impl<'a> TableLookup<'a> {
    /// A lookup over a table that declares its own signatures (the default table).
    pub fn new(table: &'a LocaleTable) -> Self {
        TableLookup {
            table,
            signatures: table,
        }
    }

    /// Binds arguments by the placeholder order declared in `defaults`.
    pub fn with_signatures(mut self, defaults: &'a LocaleTable) -> Self {
        self.signatures = defaults;
        self
    }
}

impl Lookup for TableLookup<'_> {
    fn lookup(&self, key: &str, args: &[&str]) -> Option<String> {
        let resource = self.table.find(key)?;
        let names = self
            .signatures
            .find(key)
            .map_or(&resource.placeholders, |declared| &declared.placeholders);
        let bound: Vec<(&str, &str)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), args.get(i).copied().unwrap_or_default()))
            .collect();
        Some(substitute_placeholders(&resource.value, &bound))
    }
}

/// An optional custom lookup layered over a mandatory default lookup.
#[derive(Clone, Copy)]
pub struct LayeredLookup<'a> {
    custom: Option<&'a dyn Lookup>,
    default: &'a dyn Lookup,
}

impl<'a> LayeredLookup<'a> {
    pub fn new(default: &'a dyn Lookup) -> Self {
        LayeredLookup {
            custom: None,
            default,
        }
    }

    pub fn with_custom(mut self, custom: &'a dyn Lookup) -> Self {
        self.custom = Some(custom);
        self
    }

    /// The custom value when it exists and is non-empty, otherwise the default value.
    pub fn resolve(&self, key: &str, args: &[&str]) -> String {
        self.custom
            .and_then(|custom| custom.lookup(key, args))
            .filter(|value| !value.is_empty())
            .or_else(|| self.default.lookup(key, args))
            .unwrap_or_default()
    }
}

/// Key-based access over the default table's accessors.
pub struct Dispatcher<'a> {
    defaults: &'a LocaleTable,
    lookup: LayeredLookup<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(defaults: &'a LocaleTable, lookup: LayeredLookup<'a>) -> Self {
        Dispatcher { defaults, lookup }
    }

    /// Returns the translation for `key`, or an empty string if `key` is not a default key.
    ///
    /// Every placeholder of `key` is expected in `args`; a missing one is passed as
    /// an empty string.
    pub fn get_string(&self, key: &str, args: &HashMap<String, String>) -> String {
        let Some(resource) = self.defaults.find(key) else {
            return String::new();
        };
        let positional: Vec<&str> = resource
            .shape()
            .params()
            .iter()
            .map(|name| args.get(name).map(String::as_str).unwrap_or_default())
            .collect();
        self.lookup.resolve(&resource.key, &positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Locale;

    fn defaults() -> LocaleTable {
        LocaleTable::new(Locale::new("en"))
            .with_string("hello", "Hello")
            .with_string("greeting", "Hi {name}, meet {friend}")
    }

    #[test]
    fn test_table_lookup_substitutes() {
        let table = defaults();
        let lookup = TableLookup::new(&table);
        assert_eq!(
            lookup.lookup("greeting", &["Ada", "Grace"]).as_deref(),
            Some("Hi Ada, meet Grace")
        );
        assert!(lookup.lookup("nope", &[]).is_none());
    }

    #[test]
    fn test_translation_binds_by_default_signature() {
        let table = defaults();
        let ja = LocaleTable::new(Locale::new("ja"))
            .with_string("greeting", "{friend} meets {name}");
        let lookup = TableLookup::new(&ja).with_signatures(&table);
        assert_eq!(
            lookup.lookup("greeting", &["Ada", "Grace"]).as_deref(),
            Some("Grace meets Ada")
        );
    }

    #[test]
    fn test_layered_without_custom_uses_default() {
        let table = defaults();
        let default = TableLookup::new(&table);
        let layered = LayeredLookup::new(&default);
        assert_eq!(layered.resolve("hello", &[]), "Hello");
    }

    #[test]
    fn test_layered_custom_empty_falls_back() {
        let table = defaults();
        let default = TableLookup::new(&table);
        let custom = |_: &str, _: &[&str]| Some(String::new());
        let layered = LayeredLookup::new(&default).with_custom(&custom);
        assert_eq!(layered.resolve("hello", &[]), "Hello");
    }

    #[test]
    fn test_layered_custom_wins() {
        let table = defaults();
        let default = TableLookup::new(&table);
        let custom = |key: &str, _: &[&str]| (key == "hello").then(|| "Howdy".to_string());
        let layered = LayeredLookup::new(&default).with_custom(&custom);
        assert_eq!(layered.resolve("hello", &[]), "Howdy");
    }

    #[test]
    fn test_dispatcher_reads_args_by_name() {
        let table = defaults();
        let default = TableLookup::new(&table);
        let dispatcher = Dispatcher::new(&table, LayeredLookup::new(&default));
        let args = HashMap::from([
            ("friend".to_string(), "Grace".to_string()),
            ("name".to_string(), "Ada".to_string()),
        ]);
        assert_eq!(dispatcher.get_string("greeting", &args), "Hi Ada, meet Grace");
    }

    #[test]
    fn test_dispatcher_unknown_key_is_empty() {
        let table = defaults();
        let default = TableLookup::new(&table);
        let dispatcher = Dispatcher::new(&table, LayeredLookup::new(&default));
        assert_eq!(dispatcher.get_string("unknown", &HashMap::new()), "");
    }
}
