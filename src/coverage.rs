//! Translation coverage of a resource collection against its default locale.

use serde::Serialize;

use crate::types::{Locale, ResourceCollection};

/// A default-locale key with no translation in some locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslation {
    pub key: String,
    pub locale: Locale,
}

/// Coverage of a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub translated: usize,
    pub total: usize,
    /// Default keys absent from this locale's table, in default-table order.
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.translated as f64) * 100.0 / (self.total as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub default_locale: Locale,
    pub keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Computes coverage per locale, in collection order.
    ///
    /// Keys come from the default table; a collection without one reports zero keys.
    pub fn from_collection(collection: &ResourceCollection) -> Self {
        let keys: Vec<&str> = collection
            .default_values()
            .map(|t| t.resources.iter().map(|r| r.key.as_str()).collect())
            .unwrap_or_default();

        let locales = collection
            .locales()
            .into_iter()
            .map(|locale| {
                let table = collection.table(locale);
                let missing: Vec<String> = keys
                    .iter()
                    .filter(|key| table.and_then(|t| t.find(key)).is_none())
                    .map(|key| key.to_string())
                    .collect();
                LocaleCoverage {
                    locale: locale.clone(),
                    translated: keys.len() - missing.len(),
                    total: keys.len(),
                    missing,
                }
            })
            .collect();

        CoverageReport {
            default_locale: collection.default_locale.clone(),
            keys: keys.len(),
            locales,
        }
    }

    /// All missing (key, locale) pairs.
    pub fn missing_translations(&self) -> Vec<MissingTranslation> {
        self.locales
            .iter()
            .flat_map(|coverage| {
                coverage.missing.iter().map(|key| MissingTranslation {
                    key: key.clone(),
                    locale: coverage.locale.clone(),
                })
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|c| c.missing.is_empty())
    }
}
