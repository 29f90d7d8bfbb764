//! Core types: Entry, CodeSegment, EntryId

mod entry;
mod entry_id;

pub use entry::{CodeSegment, Entry};
pub use entry_id::{EntryId, ParseEntryIdError};
