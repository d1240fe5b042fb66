use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::errors::LedgerError;

use super::budget::Budget;
use super::summary::{BudgetLine, BudgetTotals, SummaryReport};

/// Bookkeeping state for one pool of funds.
///
/// Budgets are keyed by their case-sensitive name and kept in creation
/// order. Names are never reused: budgets cannot be removed, only
/// reallocated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    available: f64,
    budgets: HashMap<String, Budget>,
    order: Vec<String>,
}

impl Ledger {
    pub fn new(initial_funds: f64) -> Self {
        Self {
            available: initial_funds,
            budgets: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.initial_funds)
    }

    /// Funds not yet committed to any budget.
    pub fn available(&self) -> f64 {
        self.available
    }

    /// Funds committed across all budgets, summed in creation order.
    pub fn committed(&self) -> f64 {
        self.budgets().map(|budget| budget.allocated).sum()
    }

    pub fn budget(&self, name: &str) -> Option<&Budget> {
        self.budgets.get(name)
    }

    /// Budgets in creation order.
    pub fn budgets(&self) -> impl Iterator<Item = &Budget> {
        self.order
            .iter()
            .filter_map(move |name| self.budgets.get(name))
    }

    pub fn budget_count(&self) -> usize {
        self.order.len()
    }

    /// Creates a budget and commits `amount` to it out of the pool.
    ///
    /// The name must be unused and the amount must not exceed the available
    /// funds; committing the pool down to exactly zero is fine. Duplicate
    /// names are reported before funds are even considered. Returns the
    /// available funds after the commitment.
    pub fn allocate(&mut self, name: impl Into<String>, amount: f64) -> Result<f64, LedgerError> {
        let name = name.into();
        if self.budgets.contains_key(&name) {
            return Err(LedgerError::DuplicateBudget(name));
        }
        if amount > self.available {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.available,
            });
        }

        self.available -= amount;
        let budget = Budget::new(name, amount);
        tracing::debug!(name = %budget.name, amount, available = self.available, "budget created");
        self.order.push(budget.name.clone());
        self.budgets.insert(budget.name.clone(), budget);
        Ok(self.available)
    }

    /// Replaces a budget's committed amount, settling the difference against
    /// the pool.
    ///
    /// Growing a budget draws the increase from the available funds and is
    /// refused when they do not cover it; shrinking one releases funds back.
    /// The expenditure record is untouched either way. Returns the available
    /// funds after the adjustment.
    pub fn reallocate(&mut self, name: &str, new_amount: f64) -> Result<f64, LedgerError> {
        let budget = self
            .budgets
            .get_mut(name)
            .ok_or_else(|| LedgerError::BudgetNotFound(name.to_string()))?;

        let old_amount = budget.allocated;
        if new_amount > old_amount + self.available {
            return Err(LedgerError::InsufficientFunds {
                requested: new_amount - old_amount,
                available: self.available,
            });
        }

        budget.allocated = new_amount;
        self.available -= new_amount - old_amount;
        tracing::debug!(name, new_amount, available = self.available, "budget reallocated");
        Ok(self.available)
    }

    /// Appends a spend to a budget's expenditure record.
    ///
    /// Spending is tracked against the budget alone and never touches the
    /// pool, so any amount is accepted; overspending simply drives the
    /// remainder negative. Returns the budget's remaining amount after the
    /// spend.
    pub fn record_spend(&mut self, name: &str, amount: f64) -> Result<f64, LedgerError> {
        let budget = self
            .budgets
            .get_mut(name)
            .ok_or_else(|| LedgerError::BudgetNotFound(name.to_string()))?;

        budget.record(amount);
        let remaining = budget.remaining();
        tracing::debug!(name, amount, remaining, "spend recorded");
        Ok(remaining)
    }

    /// Computes the creation-ordered summary of every budget plus the
    /// ledger-wide totals.
    pub fn summarize(&self) -> SummaryReport {
        let mut lines = Vec::with_capacity(self.order.len());
        let mut total_allocated = 0.0;
        let mut total_spent = 0.0;

        for budget in self.budgets() {
            let spent = budget.spent();
            total_allocated += budget.allocated;
            total_spent += spent;
            lines.push(BudgetLine {
                name: budget.name.clone(),
                totals: BudgetTotals::from_parts(budget.allocated, spent),
            });
        }

        SummaryReport {
            lines,
            totals: BudgetTotals::from_parts(total_allocated, total_spent),
        }
    }
}
