#![cfg(feature = "std")]

//! Process logger for the `broadside` binary.
//!
//! The engine core never logs. `Session` emits one `debug` record per shot
//! (coordinate, outcome, and the computer's search mode) and one `info`
//! record when a match is decided; the binary adds an `info` line per `sim`
//! run. Records go to stderr so that `sim` output on stdout stays valid JSON.

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // drop the crate prefix so lines read "session: ..." rather than "broadside::session: ..."
        let target = record.target();
        let module = target.rsplit("::").next().unwrap_or(target);
        eprintln!("{:<5} {}: {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `BROADSIDE_LOG` value; unset or unparsable means `info`.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by [`LOG_ENV`].
/// A second call keeps the first logger.
pub fn init_logging() {
    let level = parse_log_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
