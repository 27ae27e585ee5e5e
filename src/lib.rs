#![doc(test(attr(deny(warnings))))]

//! Fiscalizer Core provides the transaction and budget stores plus the pure
//! aggregation engine behind a single-user personal finance dashboard.

pub mod analytics;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fiscalizer tracing initialized.");
    });
}
