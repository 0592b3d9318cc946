// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`log`] backend writing to the browser console.

use alloc::format;
use alloc::string::String;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`Log`] implementation that routes records to `console.error`,
/// `console.warn`, `console.info`, or `console.debug` by level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] as the global logger and sets the maximum
/// level.
///
/// # Errors
///
/// Returns an error if a global logger was already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}", record.target(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_line_carries_target() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("unknown section key: \"bogus\""))
                .level(Level::Warn)
                .target("folio_core::site")
                .build(),
        );
        assert_eq!(line, "[folio_core::site] unknown section key: \"bogus\"");
    }
}
