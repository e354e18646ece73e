//! Debug logging for soapbox.
//!
//! All `log::*!` output from soapbox and its sub-crates is routed to a debug
//! log file so that stdout stays clean for command output (JSON lines from
//! `scan`, for example).
//!
//! Log file: `/tmp/soapbox_debug.log` on Unix/macOS,
//! `%TEMP%\soapbox_debug.log` on Windows.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config
//! file's `log_level`. When `RUST_LOG` is set, records are mirrored to stderr.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use soapbox_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Bridge from the `log` facade to the debug log file.
struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: AtomicBool,
    /// Set when the level came from the CLI or `RUST_LOG`; config may not override it.
    level_pinned: AtomicBool,
}

impl LogBridge {
    const fn new() -> Self {
        Self {
            file: parking_lot::const_mutex(None),
            mirror_stderr: AtomicBool::new(false),
            level_pinned: AtomicBool::new(false),
        }
    }

    /// Open the log file on first use and write the session header.
    fn ensure_file(&self) {
        let mut file = self.file.lock();
        if file.is_some() {
            return;
        }
        // Silently fail if the log file can't be opened; logging must never
        // break command output.
        if let Ok(mut f) = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            let _ = writeln!(
                f,
                "\n{}\nsoapbox debug session started at {} (level={})\n{}",
                "=".repeat(80),
                get_timestamp(),
                log::max_level(),
                "=".repeat(80)
            );
            *file = Some(f);
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr.load(Ordering::Relaxed) {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: LogBridge = LogBridge::new();
static INSTALLED: OnceLock<()> = OnceLock::new();

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/soapbox_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("soapbox_debug.log")
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn set_level(level: LevelFilter) {
    log::set_max_level(level);
    if level != LevelFilter::Off {
        BRIDGE.ensure_file();
    }
}

/// Parse a `RUST_LOG` value. Only a bare level name is understood.
fn rust_log_level(value: &str) -> Option<LevelFilter> {
    value.parse::<LogLevel>().ok().map(LogLevel::to_level_filter)
}

/// Install the log bridge. Safe to call more than once; later calls are ignored.
///
/// `cli_level` wins over `RUST_LOG`. With neither, logging stays off until
/// [`apply_config_level`] runs.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    if INSTALLED.set(()).is_err() {
        return;
    }
    if log::set_logger(&BRIDGE).is_err() {
        // Another logger is already installed (e.g. by an embedding application).
        return;
    }

    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| rust_log_level(&v));
    if env_level.is_some() {
        BRIDGE.mirror_stderr.store(true, Ordering::Relaxed);
    }

    match cli_level.or(env_level) {
        Some(level) => {
            BRIDGE.level_pinned.store(true, Ordering::Relaxed);
            set_level(level);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}

/// Apply the config file's level unless the CLI or `RUST_LOG` already chose one.
pub fn apply_config_level(level: LogLevel) {
    if BRIDGE.level_pinned.load(Ordering::Relaxed) {
        return;
    }
    set_level(level.to_level_filter());
}

// Convenience macros for category-tagged logging. The category becomes the
// record target, so it shows up in the `[target]` column of the log file.
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}
