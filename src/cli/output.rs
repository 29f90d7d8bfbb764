//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Entry;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single matched entry in find output.
#[derive(Debug, Serialize)]
pub struct EntryListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentListing>,
}

/// Code segment fields in find output.
#[derive(Debug, Serialize)]
pub struct SegmentListing {
    pub lang: String,
    pub text: String,
}

impl EntryListing {
    /// Builds a listing from a matched entry and its parent heading key.
    pub fn from_match(entry: &Entry, parent_key: &str) -> Self {
        Self {
            id: parent_key.to_string(),
            title: entry.title().to_string(),
            description: entry.description().to_string(),
            source: entry.source().to_string(),
            keywords: entry.keywords().to_vec(),
            segment: entry.segment().map(|segment| SegmentListing {
                lang: segment.language().to_string(),
                text: segment.body_text().to_string(),
            }),
        }
    }
}
