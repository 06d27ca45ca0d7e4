use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::SUGGESTED_GOALS;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::utils::time_utils::now_nanos;

/// Service for goals.
///
/// New goals always start uncompleted; `update_goal` is the only path that
/// touches stored state after creation, and it only writes the flag.
pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    async fn add_goal(&self, text: &str) -> Result<Goal> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField("text")));
        }

        let new_goal = NewGoal {
            text: text.to_string(),
            created_at: now_nanos(),
            completed: false,
        };
        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        debug!("Added goal {}", goal.id);
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: i64, completed: bool) -> Result<Goal> {
        self.goal_repo.update_goal_completed(goal_id, completed).await
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<()> {
        let deleted = self.goal_repo.delete_goal(goal_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Goal", goal_id));
        }
        Ok(())
    }

    fn get_suggested_goals(&self) -> Vec<String> {
        SUGGESTED_GOALS.iter().map(|s| s.to_string()).collect()
    }
}
