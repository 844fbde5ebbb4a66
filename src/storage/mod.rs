pub mod memory;

use crate::errors::StoreError;
use crate::ledger::Transaction;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over the document store the application shell persists
/// generated transactions into. The generation driver issues one create call
/// per entry with no ordering or batch-atomicity guarantee, so
/// implementations only need to make each call independently durable.
pub trait TransactionStore: Send {
    fn create_transaction(&mut self, transaction: &Transaction) -> Result<()>;
}

pub use memory::MemoryStore;
