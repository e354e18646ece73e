//! Configuration system for the SoapBox tip tooling.
//!
//! This crate provides configuration loading, saving, and default values:
//!
//! - Log level for the debug log file
//! - Extra currency aliases layered over the parser's built-in table
//! - `${SOAPBOX_*}` references in alias symbols, resolved from the environment

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, TipSettings, resolve_symbol};
pub use error::ConfigError;
pub use types::LogLevel;
