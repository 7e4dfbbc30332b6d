//! CLI library for testing purposes

pub mod config;
pub mod coverage;
pub mod generate;
pub mod resolve;

pub use config::{Config, DEFAULT_CONFIG_FILE};
