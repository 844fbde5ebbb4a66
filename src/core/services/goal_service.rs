use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::ValidationError;
use crate::ledger::{GoalProgress, Ledger, SavingsGoal};

pub struct GoalService;

impl GoalService {
    pub fn add(ledger: &mut Ledger, goal: SavingsGoal) -> ServiceResult<Uuid> {
        if goal.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Goal name must not be empty".into()));
        }
        if goal.target_amount <= 0.0 || goal.current_amount < 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        Ok(ledger.add_goal(goal))
    }

    /// Adds a contribution and returns the goal's updated progress.
    pub fn contribute(ledger: &mut Ledger, id: Uuid, amount: f64) -> ServiceResult<GoalProgress> {
        if amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let goal = ledger
            .goal_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Goal not found".into()))?;
        goal.contribute(amount);
        let progress = GoalProgress::of(goal);
        ledger.touch();
        Ok(progress)
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let before = ledger.goals.len();
        ledger.goals.retain(|goal| goal.id != id);
        if ledger.goals.len() == before {
            return Err(ServiceError::Invalid("Goal not found".into()));
        }
        ledger.touch();
        Ok(())
    }

    pub fn progress(ledger: &Ledger) -> Vec<GoalProgress> {
        ledger.goals.iter().map(GoalProgress::of).collect()
    }
}
