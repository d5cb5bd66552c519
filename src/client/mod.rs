//! Client side of the mood journal: an HTTP client for the API, the state of
//! one journal page session, and a text renderer for that page.

mod api;
mod page;
pub mod render;

pub use api::{ApiClient, ClientError};
pub use page::{JournalPage, ListState, SubmitState, LOAD_ERROR, MOOD_MISSING, SAVE_FALLBACK};
pub use crate::models::mood::MOOD_OPTIONS;
