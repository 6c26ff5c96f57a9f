//! HTTP handlers for notetag-api.

pub mod health;
pub mod notes;
pub mod tags;

pub use health::health_check;
pub use notes::{create_note, delete_note, get_note, list_notes, update_note};
pub use tags::generate_tags;
