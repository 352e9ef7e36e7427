#![cfg(feature = "std")]

//! Stderr logger for the CLI. Stdout is reserved for boards and JSON.

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level name.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Log level used when `SEABATTLE_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct MatchLogger;

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), record.args());
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: MatchLogger = MatchLogger;

/// Render one log line as `LEVEL [module] message`, dropping the crate prefix
/// from the module path.
pub fn format_line(level: log::Level, target: &str, args: impl std::fmt::Display) -> String {
    let module = target.strip_prefix("seabattle::").unwrap_or(target);
    format!("{:<5} [{}] {}", level, module, args)
}

/// Parse a level name such as `debug` or `warn`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Level for a run: the parsed `SEABATTLE_LOG` value, capped at `warn` when
/// `quiet` is set.
pub fn effective_level(value: Option<&str>, quiet: bool) -> LevelFilter {
    let level = parse_level(value);
    if quiet {
        level.min(LevelFilter::Warn)
    } else {
        level
    }
}

/// Install the logger. Only the first call in a process takes effect.
pub fn init_logging(quiet: bool) {
    let level = effective_level(env::var(LOG_ENV).ok().as_deref(), quiet);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
