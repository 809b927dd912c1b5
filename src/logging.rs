use std::{
    io::{self, Write},
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn))
}

/// Installs the logger. Calling it again only changes the level.
pub fn init(level: log::LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Writes log records to stderr, one line each.
pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        self.min_level
            .read()
            .map(|l| *l)
            .unwrap_or(log::LevelFilter::Warn)
    }

    pub fn set_min_level(&self, level: log::LevelFilter) {
        if let Ok(mut l) = self.min_level.write() {
            *l = level;
        }
    }
}

pub fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Error => Color::Red,
        log::Level::Warn => Color::Yellow,
        log::Level::Info => Color::White,
        log::Level::Debug => Color::Blue,
        log::Level::Trace => Color::BrightBlack,
    }
}

pub fn format_line(level: log::Level, source: &str, message: &str) -> String {
    format!(
        "[{} {}] {}",
        level.to_string().color(level_color(level)),
        source.dimmed(),
        message
    )
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            // nowhere left to report a failing stderr
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let line = format_line(log::Level::Warn, "ratcore::loader", "bad char");
        assert!(line.starts_with('['));
        assert!(line.contains("WARN"));
        assert!(line.contains("ratcore::loader"));
        assert!(line.ends_with("] bad char"));
    }

    #[test]
    fn level_filtering() {
        let logger = AppLogger::new(log::LevelFilter::Info);
        let meta = |level| Metadata::builder().level(level).build();
        assert!(logger.enabled(&meta(log::Level::Error)));
        assert!(logger.enabled(&meta(log::Level::Info)));
        assert!(!logger.enabled(&meta(log::Level::Debug)));

        logger.set_min_level(log::LevelFilter::Off);
        assert!(!logger.enabled(&meta(log::Level::Error)));
    }
}
