//! Detection history for the Krishi advisory tools.
//!
//! A capped, most-recent-first log of records, each stamped with a UUID v7
//! and a UTC timestamp, persisted as a pretty-printed JSON array.
//!
//! # Modules
//!
//! - [`log`] -- In-memory [`HistoryLog`] and its [`HistoryEntry`] items
//! - [`store`] -- [`FileHistoryStore`] load, save and append
//! - [`record`] -- [`DetectionRecord`], the disease detection entry
//! - [`error`] -- Shared error type

pub mod error;
pub mod log;
pub mod record;
pub mod store;

pub use error::HistoryError;
pub use log::{HistoryEntry, HistoryLog};
pub use record::{DISEASE_HISTORY_CAPACITY, DetectionRecord};
pub use store::FileHistoryStore;
