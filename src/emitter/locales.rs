//! Supported-locale list and Dart `Locale` literals.

use crate::{
    escape::dart_string_literal,
    types::{Locale, ResourceCollection},
};

/// Supported locales in output order: the default locale first, then every other
/// distinct locale in collection order.
pub fn supported_locales(collection: &ResourceCollection) -> Vec<&Locale> {
    let mut locales = vec![&collection.default_locale];
    locales.extend(
        collection
            .locales()
            .into_iter()
            .filter(|locale| **locale != collection.default_locale),
    );
    locales
}

/// Emits the `supportedLocales` declaration.
pub fn emit_supported_locales(collection: &ResourceCollection) -> String {
    let mut out = String::from("static const List<Locale> supportedLocales = <Locale>[\n");
    for locale in supported_locales(collection) {
        out.push_str("  ");
        out.push_str(&locale_literal(locale));
        out.push_str(",\n");
    }
    out.push_str("];\n");
    out
}

/// Renders the smallest Dart constructor that carries every set field of `locale`.
///
/// | Fields set | Literal |
/// |---|---|
/// | language | `Locale('en')` |
/// | language, country | `Locale('de', 'AT')` |
/// | language, script | `Locale.fromSubtags(languageCode: 'zh', scriptCode: 'Hans')` |
/// | all three | `Locale.fromSubtags(languageCode: 'zh', scriptCode: 'Hans', countryCode: 'CN')` |
pub fn locale_literal(locale: &Locale) -> String {
    let language = dart_string_literal(&locale.language);
    match (&locale.script, &locale.country) {
        (None, None) => format!("Locale({})", language),
        (None, Some(country)) => format!("Locale({}, {})", language, dart_string_literal(country)),
        (Some(script), None) => format!(
            "Locale.fromSubtags(languageCode: {}, scriptCode: {})",
            language,
            dart_string_literal(script)
        ),
        (Some(script), Some(country)) => format!(
            "Locale.fromSubtags(languageCode: {}, scriptCode: {}, countryCode: {})",
            language,
            dart_string_literal(script),
            dart_string_literal(country)
        ),
    }
}
