//! History domain module.
//!
//! # Module Structure
//!
//! - `model`: `HistoryEntry` and its creation-order id
//! - `store`: `HistoryStore`, the bounded FIFO window of past analyses

mod model;
mod store;

pub use model::{HistoryEntry, HistoryEntryId};
pub use store::{DEFAULT_HISTORY_CAPACITY, HistoryStore};
