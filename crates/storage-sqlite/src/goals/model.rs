//! Database models for goals.

use diesel::prelude::*;

/// Database model for a goal
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i64,
    pub text: String,
    pub created_at: i64,
    pub completed: bool,
}

/// Database model for creating a new goal.
///
/// No id column: SQLite assigns the next AUTOINCREMENT value.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub text: String,
    pub created_at: i64,
    pub completed: bool,
}

// Conversion to domain models
impl From<GoalDB> for garden_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            text: db.text,
            created_at: db.created_at,
            completed: db.completed,
        }
    }
}

impl From<garden_core::goals::NewGoal> for NewGoalDB {
    fn from(domain: garden_core::goals::NewGoal) -> Self {
        Self {
            text: domain.text,
            created_at: domain.created_at,
            completed: domain.completed,
        }
    }
}
