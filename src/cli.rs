//! Command-line interface for soapbox.
//!
//! Argument parsing lives in [`Cli`]; [`run_command`] executes a subcommand
//! against explicit input/output handles so it can be driven from tests.

use anyhow::Context;
use clap::{Parser, Subcommand};
use soapbox_config::Config;
use soapbox_tip::{TipCommand, TipParser, validate_tip_command};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::chat::classify_message;

/// soapbox - tip command tooling for SoapBox chat rooms
#[derive(Parser, Debug)]
#[command(name = "soapbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/soapbox/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Parse a chat message and print the tip command as JSON
    Parse {
        /// Message text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print why the message was rejected
        #[arg(long)]
        explain: bool,
    },

    /// Check a JSON-encoded tip command
    Validate {
        /// Tip command JSON, e.g. '{"action":"tip",...}'
        json: String,
    },

    /// Classify chat messages read from stdin, one JSON object per line
    Scan,

    /// List the currency aliases in effect
    Aliases,
}

/// Load the config from an explicit path, or from the default location.
///
/// An explicit path must exist and be valid. Problems with the default
/// location are logged and fall back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            log::warn!("Using default config: {e}");
            Config::default()
        })),
    }
}

/// Build the tip parser described by `config`.
pub fn build_parser(config: &Config) -> TipParser {
    TipParser::with_extra_aliases(&config.tip.extra_currency_aliases)
}

/// Run one subcommand. Returns the process exit code.
pub fn run_command(
    command: &Commands,
    parser: &TipParser,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<i32> {
    match command {
        Commands::Parse { text, explain } => {
            let text = text.join(" ");
            match parser.evaluate(&text) {
                Ok(tip) => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&tip)?)?;
                    Ok(0)
                }
                Err(reason) if *explain => {
                    writeln!(out, "not a tip command: {reason}")?;
                    Ok(1)
                }
                Err(_) => {
                    writeln!(out, "not a tip command")?;
                    Ok(1)
                }
            }
        }
        Commands::Validate { json } => {
            let tip: TipCommand =
                serde_json::from_str(json).context("input is not a tip command JSON object")?;
            if validate_tip_command(&tip) {
                writeln!(out, "valid")?;
                Ok(0)
            } else {
                writeln!(out, "invalid")?;
                Ok(1)
            }
        }
        Commands::Scan => {
            for (index, raw) in input.split(b'\n').enumerate() {
                let raw = raw.context("failed to read message from stdin")?;
                let line = match String::from_utf8(raw) {
                    Ok(line) => line,
                    Err(e) => {
                        crate::debug_error!(
                            "SCAN",
                            "skipping line {}: not valid UTF-8 ({})",
                            index + 1,
                            e.utf8_error()
                        );
                        continue;
                    }
                };
                let line = line.strip_suffix('\r').unwrap_or(&line);
                if line.trim().is_empty() {
                    continue;
                }
                let intent = classify_message(parser, line);
                writeln!(out, "{}", serde_json::to_string(&intent)?)?;
            }
            Ok(0)
        }
        Commands::Aliases => {
            for (alias, symbol) in parser.aliases().entries() {
                writeln!(out, "{alias} -> {symbol}")?;
            }
            Ok(0)
        }
    }
}
