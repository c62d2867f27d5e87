use std::env;

use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Log level from the `SALVO_LOG` environment variable, `warn` when unset or
/// invalid.
pub fn level_from_env() -> LevelFilter {
    env::var("SALVO_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Later calls are no-ops.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
