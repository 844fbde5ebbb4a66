use super::{Result, TransactionStore};
use crate::ledger::Transaction;

/// In-process reference implementation of [`TransactionStore`]. Real backends
/// live in the application shell; this one backs tests and examples.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TransactionStore for MemoryStore {
    fn create_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        self.entries.push(transaction.clone());
        Ok(())
    }
}
