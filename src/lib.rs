#![forbid(unsafe_code)]
//! Dart localization class generator.
//!
//! Takes translated string resources for several locales and emits the source of a
//! single Dart class: one accessor per translation key of the default locale, each
//! documented with a per-locale translation table, the list of supported locales,
//! and a dispatch method resolving keys at runtime.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use intlgen::{ClassEmitter, ResourceCollection, traits::ModelFile};
//!
//! let collection = ResourceCollection::load("l10n/model.json")?;
//! let generated = ClassEmitter::default().emit(&collection)?;
//! std::fs::write("lib/generated/s.dart", generated.source)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Generated accessors
//!
//! - A key without placeholders becomes a getter; a key with placeholders becomes a
//!   method taking one `String` per placeholder, in declaration order.
//! - Each accessor returns the custom lookup's value when it is non-empty and falls
//!   back to the default lookup otherwise.
//! - The dispatch method returns an empty string for unknown keys.

pub mod coverage;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod lookup;
pub mod placeholder;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    coverage::{CoverageReport, LocaleCoverage, MissingTranslation},
    emitter::{ClassEmitter, EmitterOptions, GeneratedClass, MISSING_TRANSLATION_MARKER},
    error::Error,
    lookup::{Dispatcher, LayeredLookup, Lookup, TableLookup},
    types::{AccessorShape, Locale, LocaleTable, ResourceCollection, StringResource},
};
