use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::TransactionKind;

const DEFAULT_COLOR: &str = "#3b82f6";

/// Categorises ledger activity for budgeting and reporting. Transactions
/// reference categories weakly: removing a category leaves the reference
/// dangling rather than cascading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
    #[serde(default = "Category::default_color")]
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            color: DEFAULT_COLOR.into(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn default_color() -> String {
        DEFAULT_COLOR.into()
    }
}
