//! Logging for the embed shell.
//!
//! In the browser every record goes to the matching `console` method; on
//! native targets (unit tests) it goes to colored stdout.

use crate::error::NeoEmbedError;

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use fern::Dispatch;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

/// Prefix on every line so host pages can filter the console.
const LOG_PREFIX: &str = "neo-embed";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the global logger at `level`.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns [`NeoEmbedError::Logger`] if another logger already owns the
/// `log` facade (e.g. a second wasm module on the same page).
pub fn initialize(level: LevelFilter) -> Result<(), NeoEmbedError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(level: LevelFilter) -> Result<(), NeoEmbedError> {
    Dispatch::new()
        .level(level)
        .chain(platform_dispatch())
        .apply()
        .map_err(|e| NeoEmbedError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[cfg(target_arch = "wasm32")]
fn platform_dispatch() -> Dispatch {
    use log::{Level, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    fn write_console(record: &Record) {
        let line = JsValue::from_str(&record.args().to_string());
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {prefix} {level}] {message} [{file}:{line}]",
                date = String::from(js_sys::Date::new_0().to_iso_string()),
                prefix = LOG_PREFIX,
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(fern::Output::call(write_console))
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_dispatch() -> Dispatch {
    use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
    use fern::colors::ColoredLevelConfig;
    use humantime::format_rfc3339;
    use std::time::SystemTime;

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {prefix} {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                prefix = LOG_PREFIX,
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stdout())
}
