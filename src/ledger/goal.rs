use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target the user contributes toward over time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            target_date: None,
        }
    }

    pub fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }

    pub fn contribute(&mut self, amount: f64) {
        self.current_amount += amount;
    }
}

/// Derived progress figures for a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    /// Share of the target reached, capped at 100.
    pub percentage: f64,
    pub remaining: f64,
    pub is_reached: bool,
}

impl GoalProgress {
    pub fn of(goal: &SavingsGoal) -> Self {
        let raw = if goal.target_amount > 0.0 {
            (goal.current_amount / goal.target_amount) * 100.0
        } else {
            0.0
        };
        Self {
            goal_id: goal.id,
            percentage: raw.min(100.0),
            remaining: (goal.target_amount - goal.current_amount).max(0.0),
            is_reached: goal.current_amount >= goal.target_amount,
        }
    }
}
