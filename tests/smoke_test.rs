use chrono::NaiveDate;
use fintrack_core::{
    core::services::{BudgetService, RecurringService, SummaryService},
    init,
    ledger::{Budget, Category, Frequency, Ledger, RecurringTransaction, TransactionKind},
    storage::MemoryStore,
};

#[test]
fn daily_generation_smoke() {
    init();

    let mut ledger = Ledger::new("SmokeTest");
    let housing = ledger.add_category(Category::new("Housing", TransactionKind::Expense));
    BudgetService::add(&mut ledger, Budget::new(housing, 2000.0)).unwrap();

    let rent = RecurringTransaction::new(
        TransactionKind::Expense,
        1500.0,
        "Rent",
        Some(housing),
        Frequency::Monthly,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    )
    .on_day_of_month(1);
    RecurringService::add(&mut ledger, rent).unwrap();

    let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let mut store = MemoryStore::new();
    let report = RecurringService::generate_due(today, &ledger, &mut store);
    assert_eq!(report.generated_count(), 1);
    for entry in report.created {
        ledger.add_transaction(entry);
    }

    let summary = SummaryService::month(&ledger, today);
    assert_eq!(summary.expenses, 1500.0);
    assert_eq!(summary.by_category[0].name, "Housing");

    let progress = &BudgetService::progress(&ledger, today)[0];
    assert_eq!(progress.spent, 1500.0);
    assert!(!progress.is_over_budget);
}
