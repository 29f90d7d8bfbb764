//! Entry struct representing one memo parsed from a document section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fenced code block attached to an entry.
///
/// Serialized as `{raw, lang, text}`: the full fenced block, the fence info
/// string, and the fence contents.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSegment {
    #[serde(rename = "raw")]
    raw_text: String,
    #[serde(rename = "lang")]
    language: String,
    #[serde(rename = "text")]
    body_text: String,
}

impl CodeSegment {
    /// Creates a segment from its three views of the same block.
    pub fn new(
        raw_text: impl Into<String>,
        language: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            language: language.into(),
            body_text: body_text.into(),
        }
    }

    /// The full fenced block, fences included.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The fence info string (e.g. `rust`), possibly empty.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The fence contents without the fences.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }
}

impl fmt::Debug for CodeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeSegment")
            .field("language", &self.language)
            .field("body_text", &self.body_text)
            .finish()
    }
}

/// One memo entry.
///
/// The four table fields always travel together: they come from a single
/// table row in the source document, and an entry without a table row is
/// never materialized. The code segment is optional.
///
/// # Examples
///
/// ```
/// use zinc::domain::Entry;
///
/// let entry = Entry::new(
///     "Alpha",
///     "First memo",
///     "https://example.com",
///     vec!["x".to_string(), "y".to_string()],
/// );
/// assert_eq!(entry.title(), "Alpha");
/// assert!(entry.segment().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    title: String,
    description: String,
    source: String,
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    segment: Option<CodeSegment>,
}

impl Entry {
    /// Creates an entry from one table row's worth of fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            source: source.into(),
            keywords,
            segment: None,
        }
    }

    /// Attaches a code segment, replacing any existing one.
    pub fn with_segment(mut self, segment: CodeSegment) -> Self {
        self.segment = Some(segment);
        self
    }

    /// Sets or clears the code segment in place.
    pub fn set_segment(&mut self, segment: Option<CodeSegment>) {
        self.segment = segment;
    }

    /// Returns the entry's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entry's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the entry's source reference (free text, often a URL).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the entry's keywords in insertion order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the attached code segment, if any.
    pub fn segment(&self) -> Option<&CodeSegment> {
        self.segment.as_ref()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
