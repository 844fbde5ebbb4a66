use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ledger::DateWindow;
use super::transaction::{Transaction, TransactionKind};

const NEAR_LIMIT_PERCENT: f64 = 80.0;

/// A spending cap for a specific category, evaluated per calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn new(category_id: Uuid, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            period: BudgetPeriod::Monthly,
        }
    }
}

/// Supported budgeting periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
}

/// Progress of a budget against the expenses recorded in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub budget_id: Uuid,
    pub category_id: Uuid,
    pub spent: f64,
    pub remaining: f64,
    /// Share of the cap consumed, capped at 100 for display.
    pub percentage: f64,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
}

impl BudgetProgress {
    /// Evaluates `budget` against the expense entries of the calendar month
    /// containing `month_of`. Income entries and other categories are
    /// ignored.
    pub fn for_month(budget: &Budget, transactions: &[Transaction], month_of: NaiveDate) -> Self {
        let window = DateWindow::month_of(month_of);
        let spent: f64 = transactions
            .iter()
            .filter(|txn| {
                txn.kind == TransactionKind::Expense
                    && txn.category_id == Some(budget.category_id)
                    && window.contains(txn.date)
            })
            .map(|txn| txn.amount)
            .sum();
        let raw = if budget.amount > 0.0 {
            (spent / budget.amount) * 100.0
        } else {
            0.0
        };
        Self {
            budget_id: budget.id,
            category_id: budget.category_id,
            spent,
            remaining: (budget.amount - spent).max(0.0),
            percentage: raw.min(100.0),
            is_over_budget: spent > budget.amount,
            // The warning band reads the uncapped ratio: 100% and beyond is
            // over budget, not near it.
            is_near_limit: raw >= NEAR_LIMIT_PERCENT && raw < 100.0,
        }
    }
}
