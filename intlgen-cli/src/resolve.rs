use std::{collections::HashMap, path::Path};

use intlgen::{
    Dispatcher, Error, LayeredLookup, Locale, ResourceCollection, TableLookup, traits::ModelFile,
};

/// Resolves `key` the way the generated dispatch method would.
///
/// The table of `locale` acts as the custom lookup and the default table as the
/// default lookup, so untranslated keys fall back to the default locale.
pub fn run_resolve(
    input: &Path,
    key: &str,
    locale: Option<&str>,
    args: &HashMap<String, String>,
) -> Result<String, Error> {
    let collection = ResourceCollection::load(input)?;
    resolve_in(&collection, key, locale, args)
}

pub fn resolve_in(
    collection: &ResourceCollection,
    key: &str,
    locale: Option<&str>,
    args: &HashMap<String, String>,
) -> Result<String, Error> {
    let defaults = collection
        .default_values()
        .ok_or_else(|| Error::MissingDefaultTable(collection.default_locale.to_string()))?;
    let default = TableLookup::new(defaults);

    let custom = match locale {
        Some(locale) => {
            let locale: Locale = locale.parse()?;
            let table = collection.table(&locale).ok_or_else(|| {
                Error::config_error(format!("no string table for locale `{}`", locale))
            })?;
            Some(TableLookup::new(table).with_signatures(defaults))
        }
        None => None,
    };

    let mut layered = LayeredLookup::new(&default);
    if let Some(custom) = &custom {
        layered = layered.with_custom(custom);
    }

    if defaults.find(key).is_none() {
        tracing::warn!(key, "unknown key");
    }
    Ok(Dispatcher::new(defaults, layered).get_string(key, args))
}

/// Parses a `name=value` placeholder argument.
pub fn parse_placeholder_arg(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("invalid placeholder argument `{}`, expected name=value", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use intlgen::LocaleTable;

    fn collection() -> ResourceCollection {
        ResourceCollection::new(
            Locale::new("en"),
            vec![
                LocaleTable::new(Locale::new("en"))
                    .with_string("hello", "Hello")
                    .with_string("greeting", "Hi {name}")
                    .with_string("transfer", "{from} paid {to}"),
                LocaleTable::new(Locale::new("de")).with_string("greeting", "Hallo {name}"),
                LocaleTable::new(Locale::new("ja"))
                    .with_string("transfer", "{to} was paid by {from}"),
            ],
        )
    }

    #[test]
    fn test_resolve_default_locale() {
        let args = HashMap::from([("name".to_string(), "Ada".to_string())]);
        assert_eq!(
            resolve_in(&collection(), "greeting", None, &args).unwrap(),
            "Hi Ada"
        );
    }

    #[test]
    fn test_resolve_locale_overrides_default() {
        let args = HashMap::from([("name".to_string(), "Ada".to_string())]);
        assert_eq!(
            resolve_in(&collection(), "greeting", Some("de"), &args).unwrap(),
            "Hallo Ada"
        );
    }

    #[test]
    fn test_resolve_reordered_translation_binds_by_name() {
        let args = HashMap::from([
            ("from".to_string(), "Ada".to_string()),
            ("to".to_string(), "Bob".to_string()),
        ]);
        assert_eq!(
            resolve_in(&collection(), "transfer", Some("ja"), &args).unwrap(),
            "Bob was paid by Ada"
        );
        assert_eq!(
            resolve_in(&collection(), "transfer", None, &args).unwrap(),
            "Ada paid Bob"
        );
    }

    #[test]
    fn test_resolve_falls_back_for_untranslated_key() {
        assert_eq!(
            resolve_in(&collection(), "hello", Some("de"), &HashMap::new()).unwrap(),
            "Hello"
        );
    }

    #[test]
    fn test_resolve_unknown_key_is_empty() {
        assert_eq!(
            resolve_in(&collection(), "nope", None, &HashMap::new()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_resolve_unknown_locale() {
        let err = resolve_in(&collection(), "hello", Some("fr"), &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("no string table for locale `fr`"));
    }

    #[test]
    fn test_parse_placeholder_arg() {
        assert_eq!(
            parse_placeholder_arg("name=Ada Lovelace").unwrap(),
            ("name".to_string(), "Ada Lovelace".to_string())
        );
        assert_eq!(
            parse_placeholder_arg("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert!(parse_placeholder_arg("novalue").is_err());
        assert!(parse_placeholder_arg("=x").is_err());
    }
}
