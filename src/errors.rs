use thiserror::Error;

/// Error type returned by [`crate::storage::TransactionStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Store rejected the entry: {0}")]
    Rejected(String),
}

/// Raised when a recurring definition or ledger input fails upstream
/// validation before it is accepted into the system.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Unknown frequency")]
    UnknownFrequency,
    #[error("Weekly definitions require a day of week between 0 and 6")]
    InvalidDayOfWeek,
    #[error("Monthly definitions require a day of month between 1 and 31")]
    InvalidDayOfMonth,
    #[error("End date must not precede the start date")]
    EndBeforeStart,
    #[error("Window end must be after its start")]
    InvalidWindow,
}

/// Error type for settings persistence failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
