#![doc(test(attr(deny(warnings))))]

//! Fund Ledger offers pool-based budget allocation and expenditure tracking
//! primitives plus the one-shot CLI built on top of them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup event.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Fund Ledger tracing initialized.");
    });
}
