use intlgen::{CoverageReport, Error};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

/// Renders the report as a plain-text table, one row per locale.
pub fn render_table(report: &CoverageReport) -> String {
    let names: Vec<String> = report
        .locales
        .iter()
        .map(|c| {
            if c.locale == report.default_locale {
                format!("{} (default)", c.locale)
            } else {
                c.locale.to_string()
            }
        })
        .collect();
    let width = names
        .iter()
        .map(|n| n.width())
        .chain(std::iter::once("Locale".width()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str("=== Coverage ===\n");
    out.push_str(&format!("Keys: {}\n", report.keys));
    out.push_str(&format!("Locales: {}\n\n", report.locales.len()));
    out.push_str(&format!("{}  Translated  Complete  Missing\n", pad("Locale", width)));

    for (name, coverage) in names.iter().zip(&report.locales) {
        out.push_str(&format!(
            "{}  {:>10}  {:>7.1}%  {}\n",
            pad(name, width),
            format!("{}/{}", coverage.translated, coverage.total),
            coverage.completion_percent(),
            coverage.missing.join(", ")
        ));
    }
    out
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &CoverageReport) -> Result<String, Error> {
    let locales: Vec<_> = report
        .locales
        .iter()
        .map(|c| {
            json!({
                "locale": c.locale,
                "translated": c.translated,
                "total": c.total,
                "completion_percent": (c.completion_percent() * 100.0).round() / 100.0,
                "missing": c.missing,
            })
        })
        .collect();
    let body = json!({
        "summary": {
            "default_locale": report.default_locale,
            "keys": report.keys,
            "locales": report.locales.len(),
            "complete": report.is_complete(),
        },
        "locales": locales,
    });
    Ok(serde_json::to_string_pretty(&body)?)
}

// Pads by display width so CJK locale names line up.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use intlgen::{Locale, LocaleTable, ResourceCollection};

    fn report() -> CoverageReport {
        CoverageReport::from_collection(&ResourceCollection::new(
            Locale::new("en"),
            vec![
                LocaleTable::new(Locale::new("en"))
                    .with_string("hello", "Hello")
                    .with_string("bye", "Bye"),
                LocaleTable::new(Locale::new("de").with_country("AT")).with_string("hello", "Servus"),
            ],
        ))
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&report());
        assert!(table.contains("Keys: 2"));
        assert!(table.contains("Locales: 2"));
        assert!(table.contains("en (default)         2/2    100.0%  \n"));
        assert!(table.contains("de_AT                1/2     50.0%  bye\n"));
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&report()).unwrap()).unwrap();
        assert_eq!(json["summary"]["keys"], 2);
        assert_eq!(json["summary"]["complete"], false);
        assert_eq!(json["locales"][1]["locale"], "de_AT");
        assert_eq!(json["locales"][1]["completion_percent"], 50.0);
        assert_eq!(json["locales"][1]["missing"][0], "bye");
    }
}
