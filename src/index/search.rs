//! Field/value search over the index tree.

use crate::domain::Entry;
use crate::index::{Children, IndexNode};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The entry field a search inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    Title,
    Description,
    Source,
    /// The default field: matches when any keyword contains the value.
    #[default]
    Keywords,
}

impl SearchField {
    /// Canonical lowercase name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Description => "description",
            SearchField::Source => "source",
            SearchField::Keywords => "keywords",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a string is not a recognized search field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search field '{value}' (expected title, description, source or keywords)")]
pub struct ParseSearchFieldError {
    value: String,
}

impl FromStr for SearchField {
    type Err = ParseSearchFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "description" => Ok(SearchField::Description),
            "source" => Ok(SearchField::Source),
            "keywords" => Ok(SearchField::Keywords),
            _ => Err(ParseSearchFieldError {
                value: s.to_string(),
            }),
        }
    }
}

/// Entries matched by a search, paired with their parent keys.
///
/// `matches` and `parent_keys` are parallel vectors in document traversal
/// order: `parent_keys[i]` is the heading key directly above `matches[i]`,
/// which is what remove and update target in the canonical document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchMatches {
    matches: Vec<Entry>,
    parent_keys: Vec<String>,
}

impl SearchMatches {
    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matched entries.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Matched entries in document order.
    pub fn matches(&self) -> &[Entry] {
        &self.matches
    }

    /// Heading keys enclosing each match, parallel to [`matches`](Self::matches).
    pub fn parent_keys(&self) -> &[String] {
        &self.parent_keys
    }

    /// Iterates `(entry, parent_key)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&Entry, &str)> {
        self.matches
            .iter()
            .zip(self.parent_keys.iter().map(String::as_str))
    }

    fn push(&mut self, entry: Entry, parent_key: String) {
        self.matches.push(entry);
        self.parent_keys.push(parent_key);
    }
}

/// Walks the tree in document order, collecting entries whose `field`
/// matches `value`.
///
/// Scalar fields (title, description, source) match on case-sensitive exact
/// equality. Keywords match when any keyword contains `value` as a
/// substring. The empty string matches every entry, which is how `find`
/// with no argument lists everything.
///
/// # Examples
///
/// ```
/// use zinc::index::{SearchField, search};
/// use zinc::parser::parse_document;
///
/// let doc = "\
/// # zinc
///
/// ## 1000
///
/// | title | description | source | keywords |
/// | ----- | ----------- | ------ | -------- |
/// | Alpha | First memo  |        | x,y      |
/// ";
/// let tree = parse_document(doc).unwrap();
/// let found = search(&tree, SearchField::Keywords, "x");
/// assert_eq!(found.parent_keys(), ["1000"]);
/// ```
pub fn search(tree: &IndexNode, field: SearchField, value: &str) -> SearchMatches {
    let mut results = SearchMatches::default();
    if let IndexNode::Branch(children) = tree {
        walk(children, field, value, &mut results);
    }
    results
}

fn walk(children: &Children, field: SearchField, value: &str, results: &mut SearchMatches) {
    for (key, node) in children.iter() {
        match node {
            IndexNode::Branch(nested) => walk(nested, field, value, results),
            IndexNode::Entry(entry) => {
                if matches_field(entry, field, value) {
                    results.push(entry.clone(), key.to_string());
                }
            }
        }
    }
}

fn matches_field(entry: &Entry, field: SearchField, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    match field {
        SearchField::Title => entry.title() == value,
        SearchField::Description => entry.description() == value,
        SearchField::Source => entry.source() == value,
        SearchField::Keywords => entry.keywords().iter().any(|k| k.contains(value)),
    }
}
