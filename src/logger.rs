use log::{LevelFilter, Metadata, Record};
use std::io::Write;

pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = decorate(record.level(), &record.args().to_string());

        // Nowhere left to report a failing stderr
        let _ = std::io::stderr().lock().write_all(message.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

pub static LOGGER: Logger = Logger;

/// Installs the logger. Later calls only change the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// `-q` wins over any number of `-v`
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }

    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Puts the level in front of every line, so multi-line messages stay
/// attributable when interleaved with objdump's stderr.
pub fn decorate(level: log::Level, message: &str) -> String {
    let mut decorated = String::with_capacity(message.len() + 8);

    for line in message.lines() {
        decorated.push_str(&format!("{}: {}\n", level, line));
    }

    if decorated.is_empty() {
        decorated.push_str(&format!("{}: \n", level));
    }

    decorated
}
