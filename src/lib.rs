// Library exports for testing and potential library use
//
// The parser itself lives in the `soapbox-tip` sub-crate and configuration in
// `soapbox-config`. This crate wires them into message classification and the
// `soapbox` command-line tool.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod chat;
pub mod cli;

pub use chat::{MessageIntent, classify_message, classify_messages};
pub use soapbox_config::Config;
pub use soapbox_tip::{
    TipCommand, TipParser, TipRejection, parse_tip_command, validate_tip_command,
};
