//! The derived index: tree model, persisted snapshots, keyword search.

mod node;
mod search;
mod store;

pub use node::{Children, IndexNode};
pub use search::{ParseSearchFieldError, SearchField, SearchMatches, search};
pub use store::{IndexError, load, memos_dir, snapshot_path, sync};
