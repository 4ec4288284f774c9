#![doc(test(attr(deny(warnings))))]

//! Backoffice Core offers the ledger, client-tracking, and pricing
//! primitives behind a construction-business back office.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod pricing;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Backoffice Core tracing initialized.");
    });
}
