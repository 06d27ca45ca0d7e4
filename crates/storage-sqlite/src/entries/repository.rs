use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use garden_core::entries::{EntryRepositoryTrait, GratitudeEntry, NewEntry};
use garden_core::Result;

use super::model::{EntryDB, NewEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::entries;

pub struct EntryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl EntryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        EntryRepository { pool, writer }
    }
}

#[async_trait]
impl EntryRepositoryTrait for EntryRepository {
    fn load_entries(&self) -> Result<Vec<GratitudeEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let entries_db = entries::table
            .order(entries::id.desc())
            .load::<EntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(entries_db.into_iter().map(GratitudeEntry::from).collect())
    }

    async fn insert_new_entry(&self, new_entry: NewEntry) -> Result<GratitudeEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<EntryDB> {
                let new_entry_db: NewEntryDB = new_entry.into();
                let result_db = diesel::insert_into(entries::table)
                    .values(&new_entry_db)
                    .returning(EntryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db)
            })
            .await
            .map(GratitudeEntry::from)
    }

    async fn delete_entry(&self, entry_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(entries::table.find(entry_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
