use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::ValidationError;
use crate::ledger::{Budget, BudgetProgress, Ledger};

pub struct BudgetService;

impl BudgetService {
    /// Adds a budget for a category. Each category carries at most one
    /// budget.
    pub fn add(ledger: &mut Ledger, budget: Budget) -> ServiceResult<Uuid> {
        if budget.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        if ledger.category(budget.category_id).is_none() {
            return Err(ServiceError::Invalid("Category not found".into()));
        }
        if ledger
            .budgets
            .iter()
            .any(|existing| existing.category_id == budget.category_id)
        {
            return Err(ServiceError::Invalid(
                "Category already has a budget".into(),
            ));
        }
        Ok(ledger.add_budget(budget))
    }

    pub fn set_amount(ledger: &mut Ledger, id: Uuid, amount: f64) -> ServiceResult<()> {
        if amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let budget = ledger
            .budgets
            .iter_mut()
            .find(|budget| budget.id == id)
            .ok_or_else(|| ServiceError::Invalid("Budget not found".into()))?;
        budget.amount = amount;
        ledger.touch();
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let before = ledger.budgets.len();
        ledger.budgets.retain(|budget| budget.id != id);
        if ledger.budgets.len() == before {
            return Err(ServiceError::Invalid("Budget not found".into()));
        }
        ledger.touch();
        Ok(())
    }

    /// Progress of every budget against the calendar month containing
    /// `month_of`.
    pub fn progress(ledger: &Ledger, month_of: NaiveDate) -> Vec<BudgetProgress> {
        ledger
            .budgets
            .iter()
            .map(|budget| BudgetProgress::for_month(budget, &ledger.transactions, month_of))
            .collect()
    }
}
