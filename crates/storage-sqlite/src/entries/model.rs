//! Database models for entries.

use diesel::prelude::*;

/// Database model for a gratitude entry
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = crate::schema::entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryDB {
    pub id: i64,
    pub text: String,
    pub timestamp: i64,
    pub category: Option<String>,
}

/// Database model for creating a new entry.
///
/// No id column: SQLite assigns the next AUTOINCREMENT value.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::entries)]
pub struct NewEntryDB {
    pub text: String,
    pub timestamp: i64,
    pub category: Option<String>,
}

// Conversion to domain models
impl From<EntryDB> for garden_core::entries::GratitudeEntry {
    fn from(db: EntryDB) -> Self {
        Self {
            id: db.id,
            text: db.text,
            timestamp: db.timestamp,
            category: db.category,
        }
    }
}

impl From<garden_core::entries::NewEntry> for NewEntryDB {
    fn from(domain: garden_core::entries::NewEntry) -> Self {
        Self {
            text: domain.text,
            timestamp: domain.timestamp,
            category: domain.category,
        }
    }
}
