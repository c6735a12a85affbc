//! Public types exposed by the `sceneseek-core` crate.

pub mod answer;
pub mod history;
pub mod identifier;
pub mod options;

pub use answer::QueryAnswer;
pub use history::HistoryEntry;
pub use identifier::VideoIdentifier;
pub use options::{StoreOptions, StoreOptionsBuilder};
