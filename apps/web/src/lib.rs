//! # Vitrine web
//!
//! The browser entry point. Loading the wasm module mounts the page
//! controller on the current document:
//!
//! 1. logging is routed to the devtools console,
//! 2. the inline `data-vitrine-config` document (if any) is parsed,
//! 3. every annotated element is bound and document listeners are installed.
//!
//! Bootstrap failures are logged and reported to the caller of the module's
//! start function; a page without the markup a behavior needs simply runs
//! without that behavior.

pub mod app;
pub mod error;
pub mod page;
pub mod schedule;

pub use crate::app::App;
pub use crate::error::{WebError, WebErrorExt};

use tracing::{error, info};
use vitrine_logger::{LevelFilter, Logger};
use wasm_bindgen::prelude::*;

const LOGGER_NAME: &str = "vitrine";

/// Runs once when the module is instantiated.
///
/// # Errors
/// Returns the bootstrap error as a JS string after logging it.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let _logger = Logger::builder().name(LOGGER_NAME).level(level).init().map_err(WebError::from)?;

    match App::start() {
        Ok(app) => {
            info!(behaviors = ?app.bound().names(), "Page controller started");
            Ok(())
        },
        Err(e) => {
            error!(%e, "Page controller failed to start");
            Err(e.into())
        },
    }
}
