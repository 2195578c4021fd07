//! Application logging
//!
//! Leveled, module-tagged logging with an in-memory buffer so the consuming
//! UI can show recent log lines without touching the filesystem. Lines are
//! mirrored to stderr. Debug lines are dropped unless the debug toggle is on.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::config;

/// Recent log lines, oldest first, capped at `config::logging::MAX_BUFFER_LINES`
static LOG_BUFFER: Lazy<Mutex<VecDeque<String>>> =
    Lazy::new(|| Mutex::new(VecDeque::with_capacity(config::logging::MAX_BUFFER_LINES)));

/// Whether DEBUG lines are emitted
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Initialize the logging system and emit a startup header
pub fn init() {
    if let Ok(mut buffer) = LOG_BUFFER.lock() {
        buffer.clear();
    }
    log(
        Level::Info,
        "logging",
        format!(
            "=== {} v{} ===",
            config::app::NAME,
            env!("CARGO_PKG_VERSION")
        ),
    );
}

/// Enable or disable DEBUG output at runtime
pub fn set_debug_enabled(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
}

/// Whether DEBUG output is currently enabled
pub fn debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Record a log line. Used by the `log_*!` macros; call those instead.
pub fn log(level: Level, module: &str, message: String) {
    if level == Level::Debug && !debug_enabled() {
        return;
    }

    let line = format!(
        "{} [{:<5}] [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level.as_str(),
        module,
        message
    );

    eprintln!("{}", line);

    if let Ok(mut buffer) = LOG_BUFFER.lock() {
        if buffer.len() >= config::logging::MAX_BUFFER_LINES {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
}

/// Buffered log lines joined with newlines, oldest first
pub fn get_logs() -> String {
    match LOG_BUFFER.lock() {
        Ok(buffer) => buffer.iter().cloned().collect::<Vec<_>>().join("\n"),
        Err(_) => String::new(),
    }
}

/// Log at DEBUG level (dropped unless debug output is enabled)
#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Debug, $module, format!($($arg)*))
    };
}

/// Log at INFO level
#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Info, $module, format!($($arg)*))
    };
}

/// Log at WARN level
#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Warn, $module, format!($($arg)*))
    };
}

/// Log at ERROR level
#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Error, $module, format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line_reaches_buffer() {
        log(Level::Info, "logging::test", "marker-info-7f3a".to_string());
        assert!(get_logs().contains("marker-info-7f3a"));
        assert!(get_logs().contains("[INFO ]"));
    }

    #[test]
    fn test_debug_dropped_when_disabled() {
        set_debug_enabled(false);
        log(Level::Debug, "logging::test", "marker-debug-off-11c2".to_string());
        assert!(!get_logs().contains("marker-debug-off-11c2"));

        set_debug_enabled(true);
        log(Level::Debug, "logging::test", "marker-debug-on-11c2".to_string());
        assert!(get_logs().contains("marker-debug-on-11c2"));
        set_debug_enabled(false);
    }

    #[test]
    fn test_macros_format_arguments() {
        log_info!("logging::test", "count={} marker-macro-59b0", 3);
        assert!(get_logs().contains("count=3 marker-macro-59b0"));
    }
}
