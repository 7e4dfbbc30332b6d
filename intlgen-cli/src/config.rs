//! `intlgen.toml` configuration.
//!
//! ```toml
//! input = "l10n/model.json"
//! output = "lib/generated/s.dart"
//!
//! [emitter]
//! class_name = "S"
//! imports = ["package:flutter/widgets.dart", "lookups.dart"]
//! ```
//!
//! Relative paths are resolved against the directory holding the configuration file.

use std::path::{Path, PathBuf};

use intlgen::{EmitterOptions, Error};
use serde::Deserialize;

/// Looked up in the current directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "intlgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource model (JSON) to read.
    pub input: Option<PathBuf>,

    /// Dart file to write; stdout when unset.
    pub output: Option<PathBuf>,

    pub emitter: EmitterOptions,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::config_error(e.to_string()))
    }

    /// Loads `path`, or `intlgen.toml` from the current directory if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::config_error(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Config::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Joins relative `input` and `output` paths onto `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        self.input = self.input.map(|p| base.join(p));
        self.output = self.output.map(|p| base.join(p));
        self
    }

    /// Applies command-line flags on top of the file values.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        class_name: Option<String>,
    ) -> Self {
        if input.is_some() {
            self.input = input;
        }
        if output.is_some() {
            self.output = output;
        }
        if let Some(class_name) = class_name {
            self.emitter.class_name = class_name;
        }
        self
    }

    pub fn input(&self) -> Result<&Path, Error> {
        self.input
            .as_deref()
            .ok_or_else(|| Error::config_error("no input model given (use --input or set `input`)"))
    }
}
