//! Load, edit, and atomically save the canonical document.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::index::memos_dir;
use crate::infra::{self, FsError};

use super::sections::DocumentSections;

/// File name of the canonical document inside the memos directory.
const DOCUMENT_FILE: &str = "zinc.md";

/// Title line seeded into a document that does not exist yet.
const DOCUMENT_TITLE: &str = "# zinc\n";

/// Errors from loading or editing the canonical document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No section in the document carries this heading key.
    #[error("no entry section '## {id}' in {path}")]
    EntryNotFound { id: String, path: PathBuf },

    /// Reading or writing the document failed.
    #[error(transparent)]
    Io(#[from] FsError),
}

/// Path of the canonical document under `sink_dir`.
pub fn document_path(sink_dir: &Path) -> PathBuf {
    memos_dir(sink_dir).join(DOCUMENT_FILE)
}

/// The canonical document held in memory as raw text.
///
/// Edits are text-level so untouched sections survive byte for byte. Nothing
/// reaches the filesystem until [`save`](Self::save), which performs a single
/// staged write; composing [`remove`](Self::remove) and
/// [`append`](Self::append) before one `save` therefore replaces an entry
/// atomically.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Loads the canonical document, or starts a fresh titled one when the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] when the file exists but cannot be read.
    pub fn load(sink_dir: &Path) -> Result<Self, DocumentError> {
        let path = document_path(sink_dir);
        let text = match infra::read_utf8(&path) {
            Ok(text) => text,
            Err(FsError::NotFound { .. }) => DOCUMENT_TITLE.to_string(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, text })
    }

    /// The document's on-disk path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document's current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a rendered entry at the end of the document, separated from
    /// existing content by one blank line.
    pub fn append(&mut self, entry_markdown: &str) {
        if !self.text.is_empty() {
            while !self.text.ends_with("\n\n") {
                self.text.push('\n');
            }
        }
        self.text.push_str(entry_markdown);
    }

    /// Removes the section whose heading key is exactly `id`, leaving every
    /// other byte of the document untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EntryNotFound`] when no section carries the
    /// key.
    pub fn remove(&mut self, id: &str) -> Result<(), DocumentError> {
        let mut sections = DocumentSections::parse(&self.text);
        if sections.remove(id).is_none() {
            return Err(DocumentError::EntryNotFound {
                id: id.to_string(),
                path: self.path.clone(),
            });
        }
        self.text = sections.to_markdown();
        Ok(())
    }

    /// Writes the document back in one staged write.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] when the memos directory is missing or
    /// the write fails.
    pub fn save(&self) -> Result<(), DocumentError> {
        infra::write_staged(&self.path, &self.text)?;
        Ok(())
    }
}

/// Appends one rendered entry to the canonical document on disk.
///
/// # Errors
///
/// Returns [`DocumentError::Io`] when the document cannot be read or written.
pub fn append_entry(sink_dir: &Path, entry_markdown: &str) -> Result<(), DocumentError> {
    let mut document = Document::load(sink_dir)?;
    document.append(entry_markdown);
    document.save()
}

/// Removes one entry section from the canonical document on disk.
///
/// # Errors
///
/// Returns [`DocumentError::EntryNotFound`] when no section carries `id`, or
/// [`DocumentError::Io`] when the document cannot be read or written.
pub fn remove_entry(sink_dir: &Path, id: &str) -> Result<(), DocumentError> {
    let mut document = Document::load(sink_dir)?;
    document.remove(id)?;
    document.save()
}
