//! Generation driver: evaluates recurring definitions for a given day and
//! persists the due entries through the store collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::StoreError;
use crate::ledger::{recurring, Ledger, RecurringTransaction, Transaction};
use crate::storage::TransactionStore;

/// Outcome of one generation run. Persistence failures are isolated per
/// definition; `created` holds only the entries the store accepted, ready
/// for the caller to merge into its own state.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub created: Vec<Transaction>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.created.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single definition whose entry the store refused to create.
#[derive(Debug)]
pub struct GenerationFailure {
    pub recurring_id: Uuid,
    pub error: StoreError,
}

/// Validated operations over recurring definitions, plus the daily
/// generation run.
pub struct RecurringService;

impl RecurringService {
    /// Adds a definition after validating it, returning its identifier.
    pub fn add(ledger: &mut Ledger, definition: RecurringTransaction) -> ServiceResult<Uuid> {
        definition.validate()?;
        Ok(ledger.add_recurring(definition))
    }

    /// Toggles whether a definition is evaluated by generation runs.
    pub fn set_active(ledger: &mut Ledger, id: Uuid, is_active: bool) -> ServiceResult<()> {
        let definition = ledger
            .recurring_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Recurring transaction not found".into()))?;
        definition.is_active = is_active;
        ledger.touch();
        Ok(())
    }

    /// Removes a definition, returning it. Entries it generated stay in the
    /// ledger.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<RecurringTransaction> {
        let index = ledger
            .recurring
            .iter()
            .position(|def| def.id == id)
            .ok_or_else(|| ServiceError::Invalid("Recurring transaction not found".into()))?;
        let removed = ledger.recurring.remove(index);
        ledger.touch();
        Ok(removed)
    }

    /// Runs the occurrence engine for `today` and asks the store to create
    /// each due entry. A rejected create is recorded and logged without
    /// stopping the batch. Only `today` is evaluated: days missed between
    /// runs are not back-filled.
    pub fn generate_due(
        today: NaiveDate,
        ledger: &Ledger,
        store: &mut dyn TransactionStore,
    ) -> GenerationReport {
        let candidates = recurring::generate_due(today, &ledger.recurring, &ledger.transactions);
        let mut report = GenerationReport::default();
        for entry in candidates {
            let recurring_id = entry.recurring_id.unwrap_or_else(Uuid::nil);
            match store.create_transaction(&entry) {
                Ok(()) => report.created.push(entry),
                Err(error) => {
                    warn!(%recurring_id, %error, "failed to persist generated transaction");
                    report.failures.push(GenerationFailure {
                        recurring_id,
                        error,
                    });
                }
            }
        }
        if report.generated_count() > 0 {
            info!(
                count = report.generated_count(),
                %today,
                "generated recurring transactions"
            );
        }
        report
    }

    /// Next occurrence per live definition on/after `after`, soonest first.
    pub fn upcoming(ledger: &Ledger, after: NaiveDate) -> Vec<(Uuid, NaiveDate)> {
        let mut upcoming: Vec<_> = ledger
            .recurring
            .iter()
            .filter(|def| def.is_active && !def.has_ended(after))
            .filter_map(|def| def.next_occurrence(after).map(|date| (def.id, date)))
            .collect();
        upcoming.sort_by_key(|(_, date)| *date);
        upcoming
    }
}

/// Best-effort once-a-day gate for hosts that re-run generation on a timer.
/// Not a durable scheduler: the duplicate guard inside the driver is what
/// actually prevents double generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyRun {
    last_run: Option<NaiveDate>,
}

impl DailyRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until [`Self::mark_ran`] has been called for `today` or later.
    pub fn is_pending(&self, today: NaiveDate) -> bool {
        self.last_run.map_or(true, |last| last < today)
    }

    pub fn mark_ran(&mut self, today: NaiveDate) {
        self.last_run = Some(today);
    }

    pub fn last_run(&self) -> Option<NaiveDate> {
        self.last_run
    }
}
