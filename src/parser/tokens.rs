//! Block-level tokenization of memo documents.
//!
//! Flattens the pulldown-cmark event stream into the three block kinds the
//! tree builder cares about: headings with their depth, the first body row
//! of a table, and fenced code blocks. Everything else is dropped here.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use std::ops::Range;

/// One block-level token of a memo document.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BlockToken {
    /// A heading line with its depth (1 = `#`).
    Heading { depth: usize, text: String },
    /// A table; only the first body row is kept. `None` when the table has
    /// a header but no body rows.
    Table { first_row: Option<Vec<String>> },
    /// A code block: the full source span, the fence info string, and the
    /// body without fences.
    Code {
        raw: String,
        language: String,
        body: String,
    },
}

/// Accumulates one table while its events stream past.
#[derive(Default)]
struct TableAccumulator {
    in_head: bool,
    current_row: Option<Vec<String>>,
    current_cell: Option<String>,
    first_row: Option<Vec<String>>,
}

/// Tokenizes Markdown into block tokens, in document order.
pub(crate) fn tokenize(markdown: &str) -> Vec<BlockToken> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut tokens = Vec::new();
    let mut heading: Option<(usize, String)> = None;
    // Span kept from the start event so the raw block can be sliced out of
    // the source once the end event arrives.
    let mut code: Option<(Range<usize>, String, String)> = None;
    let mut table: Option<TableAccumulator> = None;

    for (event, range) in Parser::new_ext(markdown, options).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                heading = Some((level as usize, String::new()));
            }
            Event::End(Tag::Heading(..)) => {
                if let Some((depth, text)) = heading.take() {
                    tokens.push(BlockToken::Heading { depth, text });
                }
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((range, language, String::new()));
            }
            Event::End(Tag::CodeBlock(_)) => {
                if let Some((span, language, body)) = code.take() {
                    let raw = markdown[span].to_string();
                    tokens.push(BlockToken::Code {
                        raw,
                        language,
                        body,
                    });
                }
            }
            Event::Start(Tag::Table(_)) => {
                table = Some(TableAccumulator::default());
            }
            Event::End(Tag::Table(_)) => {
                if let Some(acc) = table.take() {
                    tokens.push(BlockToken::Table {
                        first_row: acc.first_row,
                    });
                }
            }
            Event::Start(Tag::TableHead) => {
                if let Some(acc) = table.as_mut() {
                    acc.in_head = true;
                }
            }
            Event::End(Tag::TableHead) => {
                if let Some(acc) = table.as_mut() {
                    acc.in_head = false;
                }
            }
            Event::Start(Tag::TableRow) => {
                if let Some(acc) = table.as_mut() {
                    acc.current_row = Some(Vec::new());
                }
            }
            Event::End(Tag::TableRow) => {
                if let Some(acc) = table.as_mut() {
                    if let Some(row) = acc.current_row.take() {
                        if acc.first_row.is_none() {
                            acc.first_row = Some(row);
                        }
                    }
                }
            }
            Event::Start(Tag::TableCell) => {
                if let Some(acc) = table.as_mut() {
                    // Header cells (inside TableHead, outside any row) are
                    // layout only; their text is discarded.
                    if !acc.in_head && acc.current_row.is_some() {
                        acc.current_cell = Some(String::new());
                    }
                }
            }
            Event::End(Tag::TableCell) => {
                if let Some(acc) = table.as_mut() {
                    if let Some(cell) = acc.current_cell.take() {
                        if let Some(row) = acc.current_row.as_mut() {
                            row.push(cell);
                        }
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, body)) = code.as_mut() {
                    body.push_str(&text);
                } else if let Some((_, buf)) = heading.as_mut() {
                    buf.push_str(&text);
                } else if let Some(acc) = table.as_mut() {
                    if let Some(cell) = acc.current_cell.as_mut() {
                        cell.push_str(&text);
                    }
                }
            }
            _ => {}
        }
    }

    tokens
}
