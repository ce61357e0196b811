//! Console Logger
//!
//! `log` facade backend for browser apps. Every record becomes one console
//! line of the form `[HH:MM:SS.mmm] [App] LEVEL target: message`.
//! On wasm32 lines go to the matching `console.*` method, elsewhere to stderr.

use chrono::{DateTime, Local, TimeZone};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing formatted records to the console
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { app_name, level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &Local::now(),
            self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Format one log line
pub fn format_line<Tz: TimeZone>(
    at: &DateTime<Tz>,
    app_name: &str,
    level: Level,
    target: &str,
    message: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "[{}] [{}] {:<5} {}: {}",
        at.format("%H:%M:%S%.3f"),
        app_name,
        level,
        target,
        message
    )
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger has already been installed.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(app_name, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 3).unwrap();
        let line = format_line(&at, "DevHub", Level::Warn, "devhub_ui::explorer", "like failed");
        assert_eq!(line, "[09:07:03.000] [DevHub] WARN  devhub_ui::explorer: like failed");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new("DevHub", LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).target("t").build();
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
