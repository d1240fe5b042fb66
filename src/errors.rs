use thiserror::Error;

/// Error type that captures the recoverable ledger failures.
///
/// Every variant is a local condition the caller can report and move on
/// from; none of them poison the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Budget already exists: {0}")]
    DuplicateBudget(String),
    #[error("Insufficient funds: requested {requested:.2} with {available:.2} available")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Budget not found: {0}")]
    BudgetNotFound(String),
}
