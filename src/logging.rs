//! Stderr logger for the console game and the simulator.

use std::env;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level, e.g. `SEABATTLE_LOG=debug`.
const LOG_ENV: &str = "SEABATTLE_LOG";

/// Level used when `SEABATTLE_LOG` is unset or unparsable.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Writes records to stderr, tagged with level and module.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level named by `SEABATTLE_LOG`.
///
/// Fails if another logger was installed first.
pub fn init_logging() -> Result<(), SetLoggerError> {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
