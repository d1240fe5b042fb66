use serde::{Deserialize, Serialize};

/// Construction-time settings for a ledger.
///
/// The reference workflow feeds the opening amount in through process
/// arguments; embedders build one of these instead, which keeps the ledger
/// itself free of argument parsing and process concerns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Funds available before any allocation. Accepted as-is, including
    /// zero and negative openings.
    pub initial_funds: f64,
}

impl LedgerConfig {
    pub fn new(initial_funds: f64) -> Self {
        Self { initial_funds }
    }
}
