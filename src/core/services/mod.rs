pub mod budget_service;
pub mod category_service;
pub mod goal_service;
pub mod recurring_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use goal_service::GoalService;
pub use recurring_service::{DailyRun, GenerationFailure, GenerationReport, RecurringService};
pub use summary_service::{CategorySpend, PeriodSummary, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::{StoreError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
}
