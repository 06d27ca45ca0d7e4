use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::entries::entries_model::{GratitudeEntry, NewEntry};
use crate::entries::entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::now_nanos;

/// Service for gratitude entries.
///
/// Validates and normalizes input, stamps creation times, and delegates
/// persistence to the injected repository.
pub struct EntryService<T: EntryRepositoryTrait> {
    entry_repo: Arc<T>,
}

impl<T: EntryRepositoryTrait> EntryService<T> {
    pub fn new(entry_repo: Arc<T>) -> Self {
        EntryService { entry_repo }
    }
}

#[async_trait]
impl<T: EntryRepositoryTrait> EntryServiceTrait for EntryService<T> {
    fn get_entries(&self) -> Result<Vec<GratitudeEntry>> {
        self.entry_repo.load_entries()
    }

    async fn add_entry(&self, text: &str, category: Option<&str>) -> Result<GratitudeEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField("text")));
        }

        // An all-whitespace category is the same as no category at all.
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let new_entry = NewEntry {
            text: text.to_string(),
            timestamp: now_nanos(),
            category,
        };
        let entry = self.entry_repo.insert_new_entry(new_entry).await?;
        debug!("Added entry {}", entry.id);
        Ok(entry)
    }

    async fn delete_entry(&self, entry_id: i64) -> Result<()> {
        let deleted = self.entry_repo.delete_entry(entry_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Entry", entry_id));
        }
        Ok(())
    }
}
