use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ledger entry on a calendar date. Entries produced by the
/// recurring generator carry the originating definition in `recurring_id`;
/// the relation is informational only and survives deletion of the
/// definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<Uuid>,
    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
        category_id: Option<Uuid>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description: description.into(),
            category_id,
            date,
            recurring_id: None,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// True when this entry was materialized from a recurring definition.
    pub fn is_generated(&self) -> bool {
        self.recurring_id.is_some()
    }
}

/// Direction of a ledger entry. Categories reuse the same split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}
