//! Entries module - domain models, services, and traits.

mod entries_model;
mod entries_service;
mod entries_traits;


pub use entries_model::{GratitudeEntry, NewEntry};
pub use entries_service::EntryService;
pub use entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
