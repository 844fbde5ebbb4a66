//! Business logic helpers for managing ledger transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::ValidationError;
use crate::ledger::{Ledger, Transaction};

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<Uuid> {
        if transaction.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        if transaction.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        Ok(ledger.add_transaction(transaction))
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let txn = ledger
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        mutator(txn);
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}
