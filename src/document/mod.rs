//! The canonical document: entry rendering and text-level edits.

mod editor;
mod sections;
mod template;

pub use editor::{Document, DocumentError, append_entry, document_path, remove_entry};
pub use sections::{DocumentSections, Section};
pub use template::{ENTRY_TEMPLATE, EntryFields, RenderError, render_entry};
