//! Markdown-to-tree parsing for memo documents.
//!
//! A memo document is semi-structured Markdown: headings open nested
//! sections, and a section becomes an entry the moment a four-column table
//! row appears in it. [`parse_document`] interprets the heading hierarchy
//! into an [`IndexNode`] tree keyed by heading text.

mod tokens;

use thiserror::Error;

use crate::domain::{CodeSegment, Entry};
use crate::index::{Children, IndexNode};
use tokens::{BlockToken, tokenize};

/// Error raised while interpreting a document's block structure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A table had a header but no body row to read fields from.
    #[error("entry table has no body row")]
    TableWithoutRows,
    /// The first body row did not have the four entry cells.
    #[error("entry table row has {found} cells, expected 4")]
    TableArity { found: usize },
    /// A second table appeared in a section already converted to an entry.
    #[error("section '{key}' has more than one table")]
    DuplicateTable { key: String },
    /// A table appeared in a section that already holds nested sections.
    #[error("section '{key}' mixes a table row with nested sections")]
    TableOverSections { key: String },
    /// A heading tried to open a subsection inside a converted entry.
    #[error("entry '{entry}' cannot contain nested sections")]
    NestedUnderEntry { entry: String },
}

/// Parses a memo document into its index tree.
///
/// Heading rules:
/// - a depth-1 heading (or the first heading of the document, whatever its
///   depth) starts a new top-level key and resets the open context;
/// - a deeper heading nests under the nearest open shallower heading;
/// - a heading that duplicates a sibling key replaces that sibling's
///   subtree in place.
///
/// The first body row of a table converts the current section into an
/// [`Entry`]; a fenced code block attaches to the current entry as its
/// segment. Everything else in the document is ignored.
///
/// # Errors
///
/// Returns [`ParseError`] for tables with the wrong cell count or no body
/// row, for sections mixing a table with nested sections, and for headings
/// nested inside a converted entry.
///
/// # Examples
///
/// ```
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
/// assert_eq!(tree.entry_count(), 1);
/// ```
pub fn parse_document(markdown: &str) -> Result<IndexNode, ParseError> {
    let mut state = ParserState::new();
    for token in tokenize(markdown) {
        state.apply(token)?;
    }
    Ok(state.into_root())
}

/// Explicit parser state: the stack of currently open heading keys (one per
/// depth level) and the tree being built. The stack doubles as the path to
/// the current node.
struct ParserState {
    open_heading_stack: Vec<String>,
    root: Children,
    /// Code block seen in the current section before its table row; attached
    /// when the table converts the section, dropped if no table arrives.
    pending_segment: Option<CodeSegment>,
}

impl ParserState {
    fn new() -> Self {
        Self {
            open_heading_stack: Vec::new(),
            root: Children::new(),
            pending_segment: None,
        }
    }

    fn into_root(self) -> IndexNode {
        IndexNode::Branch(self.root)
    }

    fn apply(&mut self, token: BlockToken) -> Result<(), ParseError> {
        match token {
            BlockToken::Heading { depth, text } => self.open_heading(depth, text),
            BlockToken::Table { first_row } => self.apply_table(first_row),
            BlockToken::Code {
                raw,
                language,
                body,
            } => self.apply_code(raw, language, body),
        }
    }

    fn open_heading(&mut self, depth: usize, text: String) -> Result<(), ParseError> {
        self.pending_segment = None;

        if self.open_heading_stack.is_empty() || depth == 1 {
            self.open_heading_stack.clear();
            self.root.insert(text.clone(), IndexNode::branch());
            self.open_heading_stack.push(text);
            return Ok(());
        }

        // Truncating to depth-1 discards deeper open headings, which makes
        // the new heading a sibling (same depth) or a dedent (shallower).
        // When levels were skipped the stack is already shorter and the
        // heading nests under the deepest open node.
        self.open_heading_stack.truncate(depth - 1);
        let parent = resolve_branch(&mut self.root, &self.open_heading_stack)?;
        parent.insert(text.clone(), IndexNode::branch());
        self.open_heading_stack.push(text);
        Ok(())
    }

    fn apply_table(&mut self, first_row: Option<Vec<String>>) -> Result<(), ParseError> {
        // A table before any heading has no section to convert.
        if self.open_heading_stack.is_empty() {
            return Ok(());
        }

        let row = first_row.ok_or(ParseError::TableWithoutRows)?;
        if row.len() != 4 {
            return Err(ParseError::TableArity { found: row.len() });
        }
        let mut cells = row.into_iter();
        let title = cells.next().unwrap_or_default();
        let description = cells.next().unwrap_or_default();
        let source = cells.next().unwrap_or_default();
        let keywords = split_keywords(&cells.next().unwrap_or_default());

        let mut entry = Entry::new(title, description, source, keywords);
        if let Some(segment) = self.pending_segment.take() {
            entry = entry.with_segment(segment);
        }

        let Some((key, parent_path)) = self.open_heading_stack.split_last() else {
            return Ok(());
        };
        let parent = resolve_branch(&mut self.root, parent_path)?;
        match parent.get(key) {
            Some(IndexNode::Branch(children)) if !children.is_empty() => {
                return Err(ParseError::TableOverSections { key: key.clone() });
            }
            Some(IndexNode::Entry(_)) => {
                return Err(ParseError::DuplicateTable { key: key.clone() });
            }
            _ => {}
        }
        parent.insert(key.clone(), IndexNode::Entry(entry));
        Ok(())
    }

    fn apply_code(
        &mut self,
        raw: String,
        language: String,
        body: String,
    ) -> Result<(), ParseError> {
        // Code in the document preamble belongs to no section.
        if self.open_heading_stack.is_empty() {
            return Ok(());
        }

        let segment = CodeSegment::new(raw, language, body);
        let Some((key, parent_path)) = self.open_heading_stack.split_last() else {
            return Ok(());
        };
        let parent = resolve_branch(&mut self.root, parent_path)?;
        match parent.get_mut(key) {
            Some(IndexNode::Entry(entry)) => entry.set_segment(Some(segment)),
            // Table not seen yet for this section; hold the segment until it
            // converts. Last code block wins, matching field assignment.
            _ => self.pending_segment = Some(segment),
        }
        Ok(())
    }
}

/// Walks `path` down from the root, returning the children of the deepest
/// node. Missing links are created as empty branches; a converted entry on
/// the path is an error.
fn resolve_branch<'a>(
    root: &'a mut Children,
    path: &[String],
) -> Result<&'a mut Children, ParseError> {
    let mut current = root;
    for key in path {
        current = match current.get_or_insert_branch(key) {
            IndexNode::Branch(children) => children,
            IndexNode::Entry(_) => {
                return Err(ParseError::NestedUnderEntry { entry: key.clone() });
            }
        };
    }
    Ok(current)
}

/// Strips all whitespace from a keywords cell, then splits on commas.
/// An empty cell yields a single empty keyword, as splitting does.
fn split_keywords(cell: &str) -> Vec<String> {
    let stripped: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.split(',').map(str::to_string).collect()
}
