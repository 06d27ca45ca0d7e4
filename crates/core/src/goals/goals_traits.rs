use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads all live goals, newest first.
    fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Sets the completed flag, returning the updated goal.
    /// Fails with `NotFound` when the id is absent.
    async fn update_goal_completed(&self, goal_id: i64, completed: bool) -> Result<Goal>;
    /// Returns the number of rows removed (0 when the id is absent).
    async fn delete_goal(&self, goal_id: i64) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn add_goal(&self, text: &str) -> Result<Goal>;
    async fn update_goal(&self, goal_id: i64, completed: bool) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i64) -> Result<()>;
    fn get_suggested_goals(&self) -> Vec<String>;
}
