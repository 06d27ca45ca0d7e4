use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use garden_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use garden_core::{Error, Result};

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .order(goals::id.desc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<GoalDB> {
                let new_goal_db: NewGoalDB = new_goal.into();
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db)
            })
            .await
            .map(Goal::from)
    }

    async fn update_goal_completed(&self, goal_id: i64, completed: bool) -> Result<Goal> {
        // The job reports "row absent" as None rather than an error so the
        // typed NotFound can be produced outside the writer's transaction
        // wrapper, which flattens core errors to strings.
        let updated = self
            .writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<GoalDB>> {
                let rows = diesel::update(goals::table.find(goal_id))
                    .set(goals::completed.eq(completed))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if rows == 0 {
                    return Ok(None);
                }
                let result_db = goals::table
                    .find(goal_id)
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(result_db))
            })
            .await?;

        updated
            .map(Goal::from)
            .ok_or(Error::NotFound("Goal", goal_id))
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
