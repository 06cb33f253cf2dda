//! Console logging.
//!
//! `tracing` events fall through to the `log` facade when no subscriber is
//! installed; `wasm-logger` writes those records to the browser console.

use folio_config::schema::{LogLevel, LoggingConfig};

pub fn level_for(config: &LoggingConfig) -> log::Level {
    match config.level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

/// Install the console logger. Call once, before mounting.
pub fn init(config: &LoggingConfig) {
    wasm_logger::init(wasm_logger::Config::new(level_for(config)));
}
