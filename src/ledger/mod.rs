//! Ledger domain model: the pool, the named budgets, and summary types.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use budget::Budget;
pub use ledger::Ledger;
pub use summary::{BudgetLine, BudgetStatus, BudgetTotals, SummaryReport};
