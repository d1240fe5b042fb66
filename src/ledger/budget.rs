use serde::{Deserialize, Serialize};

/// A named allocation carved out of the pool, together with every spend
/// recorded against it.
///
/// The expenditure record is append-only: refunds and corrections are
/// extra entries (negative ones for refunds), never edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub name: String,
    pub allocated: f64,
    expenditures: Vec<f64>,
}

impl Budget {
    pub fn new(name: impl Into<String>, allocated: f64) -> Self {
        Self {
            name: name.into(),
            allocated,
            expenditures: Vec::new(),
        }
    }

    /// Cumulative spend against this budget.
    pub fn spent(&self) -> f64 {
        // Explicit +0.0 identity: `Iterator::sum` for floats uses -0.0,
        // which would render an untouched budget's spend as "-0.00".
        self.expenditures.iter().fold(0.0, |total, spend| total + spend)
    }

    /// Allocated amount minus cumulative spend; negative once overspent.
    pub fn remaining(&self) -> f64 {
        self.allocated - self.spent()
    }

    /// Every recorded spend, oldest first.
    pub fn expenditures(&self) -> &[f64] {
        &self.expenditures
    }

    pub(crate) fn record(&mut self, amount: f64) {
        self.expenditures.push(amount);
    }
}
