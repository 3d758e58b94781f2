#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

const LOG_ENV: &str = "TWENTY48_LOG";

/// Writes one line per record to stderr, so it never mixes with the board
/// drawn on stdout.
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
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{:<5} {}] {}",
            record.level(),
            record.module_path().unwrap_or(record.target()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_from_env() -> LevelFilter {
    match env::var(LOG_ENV) {
        Ok(value) => value.trim().parse().unwrap_or(LevelFilter::Warn),
        Err(_) => LevelFilter::Warn,
    }
}

/// Install the stderr logger at the level named by `TWENTY48_LOG`
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`; default `warn`).
/// Calling it again after a logger is installed does nothing.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
