use crate::entries::entries_model::{GratitudeEntry, NewEntry};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for entry repository operations
#[async_trait]
pub trait EntryRepositoryTrait: Send + Sync {
    /// Loads all live entries, newest first.
    fn load_entries(&self) -> Result<Vec<GratitudeEntry>>;
    async fn insert_new_entry(&self, new_entry: NewEntry) -> Result<GratitudeEntry>;
    /// Returns the number of rows removed (0 when the id is absent).
    async fn delete_entry(&self, entry_id: i64) -> Result<usize>;
}

/// Trait for entry service operations
#[async_trait]
pub trait EntryServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<GratitudeEntry>>;
    async fn add_entry(&self, text: &str, category: Option<&str>) -> Result<GratitudeEntry>;
    async fn delete_entry(&self, entry_id: i64) -> Result<()>;
}
