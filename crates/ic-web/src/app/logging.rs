//! Browser logging initialization.
//!
//! For web builds `tracing` events are routed to the browser console. The
//! level can be raised without a rebuild by setting `ic_web_log_level` in
//! localStorage (`error`, `warn`, `info`, `debug`, `trace`).

use std::sync::Once;

#[cfg(feature = "web")]
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

pub const LOG_LEVEL_STORAGE_KEY: &str = "ic_web_log_level";

/// Initialize logging for the current platform.
///
/// Idempotent: only the first call installs the subscriber. Native builds
/// leave subscriber setup to the host.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    let level = stored_log_level().unwrap_or(LevelFilter::WARN);

    tracing_subscriber::registry().with(level).with(fmt_layer).init();
}

#[cfg(feature = "web")]
fn stored_log_level() -> Option<LevelFilter> {
    let level = crate::app::storage::BrowserStorage::new().get(LOG_LEVEL_STORAGE_KEY)?;
    parse_level(&level)
}

#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn parse_level(level: &str) -> Option<tracing::level_filters::LevelFilter> {
    use tracing::level_filters::LevelFilter;
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
