#![doc(test(attr(deny(warnings))))]

//! Budget Calculator collects income and expense entries from an interactive
//! console session and appends them as rows to a workbook.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Calculator tracing initialized.");
    });
}
