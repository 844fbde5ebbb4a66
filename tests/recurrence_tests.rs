use chrono::{Datelike, NaiveDate};
use fintrack_core::errors::ValidationError;
use fintrack_core::ledger::{last_day_of_month, Frequency, RecurringTransaction, TransactionKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn definition(frequency: Frequency, start: NaiveDate) -> RecurringTransaction {
    RecurringTransaction::new(
        TransactionKind::Expense,
        100.0,
        "Obligation",
        None,
        frequency,
        start,
    )
}

#[test]
fn nothing_is_due_before_the_start_date() {
    let start = date(2024, 6, 15);
    let probe = date(2024, 6, 14);

    let daily = definition(Frequency::Daily, start);
    let weekly = definition(Frequency::Weekly, start).on_day_of_week(probe.weekday().num_days_from_sunday());
    let monthly = definition(Frequency::Monthly, start).on_day_of_month(14);
    let yearly = definition(Frequency::Yearly, date(2024, 6, 14));

    assert!(!daily.is_due(probe));
    assert!(!weekly.is_due(probe));
    assert!(!monthly.is_due(probe));
    // Yearly start of 2024-06-14 means the anniversary itself is the start.
    assert!(yearly.is_due(probe));
    assert!(!definition(Frequency::Yearly, date(2024, 6, 15)).is_due(probe));
}

#[test]
fn daily_is_due_every_day_from_the_start() {
    let daily = definition(Frequency::Daily, date(2024, 1, 1));
    assert!(daily.is_due(date(2024, 1, 1)));
    assert!(daily.is_due(date(2024, 1, 2)));
    assert!(daily.is_due(date(2024, 12, 31)));
}

#[test]
fn weekly_matches_exactly_one_day_per_window() {
    // 2024-01-01 is a Monday (day 1 counting from Sunday = 0).
    let weekly = definition(Frequency::Weekly, date(2024, 1, 1)).on_day_of_week(1);

    assert!(weekly.is_due(date(2024, 1, 1)));
    assert!(weekly.is_due(date(2024, 1, 8)));
    assert!(weekly.is_due(date(2024, 1, 15)));
    assert!(!weekly.is_due(date(2024, 1, 2)));

    let hits = (0..7)
        .filter(|offset| weekly.is_due(date(2024, 1, 1 + offset)))
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn weekly_without_a_day_of_week_is_never_due() {
    let weekly = definition(Frequency::Weekly, date(2024, 1, 1));
    for offset in 0..7 {
        assert!(!weekly.is_due(date(2024, 1, 1 + offset)));
    }
}

#[test]
fn monthly_clamps_to_short_months() {
    let monthly = definition(Frequency::Monthly, date(2024, 1, 1)).on_day_of_month(31);

    assert!(monthly.is_due(date(2024, 1, 31)));
    assert!(monthly.is_due(date(2024, 4, 30)));
    assert!(monthly.is_due(date(2024, 6, 30)));
    assert!(monthly.is_due(date(2024, 9, 30)));
    assert!(monthly.is_due(date(2024, 11, 30)));
    assert!(!monthly.is_due(date(2024, 4, 29)));
    assert!(!monthly.is_due(date(2024, 1, 30)));
}

#[test]
fn monthly_clamp_handles_february_and_leap_years() {
    let monthly = definition(Frequency::Monthly, date(2024, 1, 1)).on_day_of_month(31);

    assert!(monthly.is_due(date(2024, 2, 29)));
    assert!(!monthly.is_due(date(2024, 2, 28)));
    assert!(monthly.is_due(date(2023, 2, 28)));
}

#[test]
fn monthly_with_a_small_day_never_clamps() {
    let monthly = definition(Frequency::Monthly, date(2024, 1, 1)).on_day_of_month(15);
    assert!(monthly.is_due(date(2024, 2, 15)));
    assert!(!monthly.is_due(date(2024, 2, 28)));
    assert!(!monthly.is_due(date(2024, 2, 29)));
}

#[test]
fn yearly_fires_only_on_the_exact_anniversary() {
    let yearly = definition(Frequency::Yearly, date(2022, 7, 4));

    assert!(yearly.is_due(date(2022, 7, 4)));
    assert!(yearly.is_due(date(2023, 7, 4)));
    assert!(yearly.is_due(date(2030, 7, 4)));
    assert!(!yearly.is_due(date(2023, 7, 5)));
    assert!(!yearly.is_due(date(2023, 6, 4)));
}

#[test]
fn yearly_february_29_stays_silent_outside_leap_years() {
    let yearly = definition(Frequency::Yearly, date(2024, 2, 29));

    assert!(yearly.is_due(date(2024, 2, 29)));
    assert!(yearly.is_due(date(2028, 2, 29)));
    assert!(!yearly.is_due(date(2025, 2, 28)));
    assert!(!yearly.is_due(date(2025, 3, 1)));
}

#[test]
fn last_day_of_month_accounts_for_leap_years() {
    assert_eq!(last_day_of_month(date(2024, 2, 10)), 29);
    assert_eq!(last_day_of_month(date(2023, 2, 10)), 28);
    assert_eq!(last_day_of_month(date(2024, 4, 1)), 30);
    assert_eq!(last_day_of_month(date(2024, 1, 31)), 31);
    assert_eq!(last_day_of_month(date(2024, 12, 25)), 31);
}

#[test]
fn next_occurrence_scans_forward_to_the_matching_day() {
    let weekly = definition(Frequency::Weekly, date(2024, 1, 1)).on_day_of_week(1);
    assert_eq!(weekly.next_occurrence(date(2024, 1, 3)), Some(date(2024, 1, 8)));
    assert_eq!(weekly.next_occurrence(date(2024, 1, 8)), Some(date(2024, 1, 8)));

    let monthly = definition(Frequency::Monthly, date(2024, 1, 1)).on_day_of_month(31);
    assert_eq!(monthly.next_occurrence(date(2024, 4, 5)), Some(date(2024, 4, 30)));
}

#[test]
fn next_occurrence_never_lands_before_the_start_date() {
    let daily = definition(Frequency::Daily, date(2030, 5, 20));
    assert_eq!(daily.next_occurrence(date(2024, 1, 1)), Some(date(2030, 5, 20)));
}

#[test]
fn next_occurrence_respects_the_inclusive_end_date() {
    let daily = definition(Frequency::Daily, date(2024, 1, 1)).ending_on(date(2024, 1, 10));
    assert_eq!(daily.next_occurrence(date(2024, 1, 10)), Some(date(2024, 1, 10)));
    assert_eq!(daily.next_occurrence(date(2024, 1, 11)), None);
}

#[test]
fn next_occurrence_gives_up_after_the_bounded_scan() {
    // The next Feb 29 after 2025-01-01 is 2028, far beyond the scan cap.
    let yearly = definition(Frequency::Yearly, date(2024, 2, 29));
    assert_eq!(yearly.next_occurrence(date(2025, 1, 1)), None);
}

#[test]
fn unknown_frequency_deserializes_and_is_never_due() {
    let json = r#"{
        "id": "3f6c1f1e-58b4-4f6e-9d2a-6f1f44c1b2aa",
        "kind": "expense",
        "amount": 25.0,
        "description": "Mystery plan",
        "frequency": "biweekly",
        "start_date": "2024-01-01",
        "is_active": true
    }"#;
    let parsed: RecurringTransaction = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.frequency, Frequency::Unknown);
    assert!(!parsed.is_due(date(2024, 1, 1)));
    assert_eq!(parsed.validate(), Err(ValidationError::UnknownFrequency));
    assert_eq!(parsed.next_occurrence(date(2024, 1, 1)), None);
}

#[test]
fn validate_rejects_each_malformed_class() {
    let start = date(2024, 1, 1);

    let mut negative = definition(Frequency::Daily, start);
    negative.amount = -5.0;
    assert_eq!(negative.validate(), Err(ValidationError::NonPositiveAmount));

    let blank = definition(Frequency::Daily, start);
    let blank = RecurringTransaction {
        description: "   ".into(),
        ..blank
    };
    assert_eq!(blank.validate(), Err(ValidationError::EmptyDescription));

    let weekly = definition(Frequency::Weekly, start).on_day_of_week(7);
    assert_eq!(weekly.validate(), Err(ValidationError::InvalidDayOfWeek));
    let weekly_missing = definition(Frequency::Weekly, start);
    assert_eq!(weekly_missing.validate(), Err(ValidationError::InvalidDayOfWeek));

    let monthly = definition(Frequency::Monthly, start).on_day_of_month(0);
    assert_eq!(monthly.validate(), Err(ValidationError::InvalidDayOfMonth));
    let monthly_high = definition(Frequency::Monthly, start).on_day_of_month(32);
    assert_eq!(monthly_high.validate(), Err(ValidationError::InvalidDayOfMonth));

    let inverted = definition(Frequency::Daily, start).ending_on(date(2023, 12, 31));
    assert_eq!(inverted.validate(), Err(ValidationError::EndBeforeStart));

    let valid = definition(Frequency::Monthly, start).on_day_of_month(31);
    assert_eq!(valid.validate(), Ok(()));
}
