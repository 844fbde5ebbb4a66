use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::{Transaction, TransactionKind};
use crate::errors::ValidationError;

const MAX_SCAN_DAYS: u32 = 366;

/// Template describing a repeating income or expense obligation. The
/// schedule fields mirror the stored document shape: `day_of_week` counts
/// from Sunday = 0 and only matters for weekly definitions, `day_of_month`
/// only for monthly ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(default = "RecurringTransaction::default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: String,
}

/// Supported recurrence cadences. Stored documents may carry values this
/// version does not know; those deserialize to `Unknown`, which is never due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unknown,
}

impl RecurringTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        category_id: Option<Uuid>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description: description.into(),
            category_id,
            frequency,
            start_date,
            end_date: None,
            day_of_week: None,
            day_of_month: None,
            is_active: true,
            notes: String::new(),
        }
    }

    pub fn on_day_of_week(mut self, day: u32) -> Self {
        self.day_of_week = Some(day);
        self
    }

    pub fn on_day_of_month(mut self, day: u32) -> Self {
        self.day_of_month = Some(day);
        self
    }

    pub fn ending_on(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn has_started(&self, today: NaiveDate) -> bool {
        self.start_date <= today
    }

    /// The end date is inclusive: a definition ending today still fires today.
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| today > end)
    }

    /// Whether this definition produces an occurrence on the given calendar
    /// date. Pure date arithmetic; the end date and active flag are checked
    /// by the generation driver, not here.
    pub fn is_due(&self, date: NaiveDate) -> bool {
        if date < self.start_date {
            return false;
        }
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Weekly => self.day_of_week == Some(date.weekday().num_days_from_sunday()),
            Frequency::Monthly => match self.day_of_month {
                // Short months clamp the target to their final day.
                Some(target) => date.day() == target.min(last_day_of_month(date)),
                None => false,
            },
            Frequency::Yearly => {
                // Exact anniversary match; Feb 29 starts stay silent outside
                // leap years.
                date.month() == self.start_date.month() && date.day() == self.start_date.day()
            }
            Frequency::Unknown => false,
        }
    }

    /// Returns the next date on/after `after` for which [`Self::is_due`]
    /// holds, never earlier than the start date. Forward-scans one day at a
    /// time, capped at 366 days; `None` means the definition has ended
    /// before a match or nothing falls inside the scan window (only
    /// reachable for Feb 29 anniversaries and unknown frequencies).
    pub fn next_occurrence(&self, after: NaiveDate) -> Option<NaiveDate> {
        let mut candidate = after.max(self.start_date);
        for _ in 0..=MAX_SCAN_DAYS {
            if let Some(end) = self.end_date {
                if candidate > end {
                    return None;
                }
            }
            if self.is_due(candidate) {
                return Some(candidate);
            }
            candidate = candidate.succ_opt()?;
        }
        None
    }

    /// Checks the definition against the constraints upheld by the editing
    /// forms before it is accepted into the ledger.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ValidationError::EndBeforeStart);
            }
        }
        match self.frequency {
            Frequency::Daily | Frequency::Yearly => Ok(()),
            Frequency::Weekly => match self.day_of_week {
                Some(0..=6) => Ok(()),
                _ => Err(ValidationError::InvalidDayOfWeek),
            },
            Frequency::Monthly => match self.day_of_month {
                Some(1..=31) => Ok(()),
                _ => Err(ValidationError::InvalidDayOfMonth),
            },
            Frequency::Unknown => Err(ValidationError::UnknownFrequency),
        }
    }

    /// Builds the concrete ledger entry for an occurrence of this definition
    /// on `date`. The entry is detached from the definition apart from the
    /// `recurring_id` back-reference and is never mutated by the engine
    /// afterward.
    pub fn materialize(&self, date: NaiveDate) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind: self.kind,
            amount: self.amount,
            description: format!("{} (Auto)", self.description),
            category_id: self.category_id,
            date,
            recurring_id: Some(self.id),
            notes: self.notes.clone(),
        }
    }

    pub fn default_active() -> bool {
        true
    }
}

/// Number of days in the calendar month containing `date` (28-31).
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year(), date.month(), 28).unwrap());
    (first_next - Duration::days(1)).day()
}

/// Computes the entries to create for `today` across all active definitions.
/// One entry exists per `(recurring_id, date)` pair: definitions already
/// represented in `existing` for today are skipped, so re-running the driver
/// within the same day emits nothing new.
pub fn generate_due(
    today: NaiveDate,
    definitions: &[RecurringTransaction],
    existing: &[Transaction],
) -> Vec<Transaction> {
    let mut created = Vec::new();
    for definition in definitions.iter().filter(|def| def.is_active) {
        if definition.has_ended(today) || !definition.has_started(today) {
            continue;
        }
        if !definition.is_due(today) {
            continue;
        }
        let duplicate = existing
            .iter()
            .any(|txn| txn.recurring_id == Some(definition.id) && txn.date == today);
        if duplicate {
            continue;
        }
        created.push(definition.materialize(today));
    }
    created
}
