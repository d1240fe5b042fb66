use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Aggregated figures for one budget, or for the ledger as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
}

impl BudgetTotals {
    pub fn from_parts(allocated: f64, spent: f64) -> Self {
        let remaining = allocated - spent;
        let status = if allocated.abs() < f64::EPSILON && spent.abs() < f64::EPSILON {
            BudgetStatus::Empty
        } else {
            match spent.partial_cmp(&allocated).unwrap_or(Ordering::Equal) {
                Ordering::Greater => BudgetStatus::OverBudget,
                Ordering::Less => BudgetStatus::UnderBudget,
                Ordering::Equal => BudgetStatus::OnTrack,
            }
        };

        Self {
            allocated,
            spent,
            remaining,
            status,
        }
    }
}

/// How spending compares to the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
    UnderBudget,
    Empty,
}

/// One summary row: a budget and its figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub name: String,
    pub totals: BudgetTotals,
}

/// Snapshot of every budget in creation order plus ledger-wide totals.
///
/// `totals.remaining` is the aggregate difference `allocated - spent`; under
/// floating point that is close to, but not guaranteed bit-identical with,
/// the sum of the per-line remainders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub lines: Vec<BudgetLine>,
    pub totals: BudgetTotals,
}

impl SummaryReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
