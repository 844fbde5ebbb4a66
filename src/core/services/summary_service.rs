use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{DateWindow, Ledger, TransactionKind};

/// Income, expense, and net totals for a date window, with expenses broken
/// down per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub window: DateWindow,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub by_category: Vec<CategorySpend>,
}

/// Expense total attributed to one category inside a summary window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub total: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Totals for the calendar month containing `date`.
    pub fn month(ledger: &Ledger, date: NaiveDate) -> PeriodSummary {
        Self::summarize(ledger, DateWindow::month_of(date))
    }

    pub fn summarize(ledger: &Ledger, window: DateWindow) -> PeriodSummary {
        let mut income = 0.0;
        let mut expenses = 0.0;
        let mut per_category: HashMap<Option<Uuid>, f64> = HashMap::new();

        for txn in ledger.transactions.iter().filter(|txn| window.contains(txn.date)) {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => {
                    expenses += txn.amount;
                    *per_category.entry(txn.category_id).or_insert(0.0) += txn.amount;
                }
            }
        }

        let mut by_category: Vec<CategorySpend> = per_category
            .into_iter()
            .map(|(category_id, total)| CategorySpend {
                category_id,
                name: category_id
                    .and_then(|id| ledger.category(id))
                    .map(|category| category.name.clone())
                    .unwrap_or_else(|| "Unknown".into()),
                total,
            })
            .collect();
        by_category.sort_by(|a, b| b.total.total_cmp(&a.total));

        PeriodSummary {
            window,
            income,
            expenses,
            net: income - expenses,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Transaction};

    #[test]
    fn month_summary_splits_income_and_expenses() {
        let mut ledger = Ledger::new("Summary");
        let food = ledger.add_category(Category::new("Food", TransactionKind::Expense));
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        ledger.add_transaction(Transaction::new(
            TransactionKind::Income,
            3000.0,
            "Salary",
            None,
            date,
        ));
        ledger.add_transaction(Transaction::new(
            TransactionKind::Expense,
            120.0,
            "Groceries",
            Some(food),
            date,
        ));
        // Outside the month, must not count.
        ledger.add_transaction(Transaction::new(
            TransactionKind::Expense,
            999.0,
            "Old groceries",
            Some(food),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
        ));

        let summary = SummaryService::month(&ledger, date);
        assert_eq!(summary.income, 3000.0);
        assert_eq!(summary.expenses, 120.0);
        assert_eq!(summary.net, 2880.0);
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_category[0].name, "Food");
    }

    #[test]
    fn uncategorized_and_deleted_categories_report_as_unknown() {
        let mut ledger = Ledger::new("Summary");
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        ledger.add_transaction(Transaction::new(
            TransactionKind::Expense,
            50.0,
            "Cash withdrawal",
            Some(Uuid::new_v4()),
            date,
        ));

        let summary = SummaryService::month(&ledger, date);
        assert_eq!(summary.by_category[0].name, "Unknown");
    }
}
