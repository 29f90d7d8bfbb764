//! New entry command handler.

use anyhow::{Result, bail};

use std::path::Path;

use super::resolve_code;
use crate::cli::NewArgs;
use crate::document::{self, EntryFields, render_entry};
use crate::domain::EntryId;
use crate::index;

/// Builds the template fields from raw argument values (pure function, no
/// I/O).
///
/// Trims every field, drops empty keywords, and rejects values that would
/// break the entry's table row.
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - No non-empty keyword remains after trimming
/// - Any table cell value contains `|` or a line break
pub fn build_entry_fields(
    title: &str,
    description: Option<&str>,
    source: Option<&str>,
    keywords: &[String],
    language: Option<&str>,
    code: Option<String>,
) -> Result<EntryFields> {
    let title = title.trim();
    if title.is_empty() {
        bail!("title cannot be empty");
    }
    table_safe("title", title)?;

    let description = description.unwrap_or_default().trim();
    table_safe("description", description)?;

    let source = source.unwrap_or_default().trim();
    table_safe("source", source)?;

    let keywords: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect();
    if keywords.is_empty() {
        bail!("at least one keyword is required");
    }
    for keyword in &keywords {
        table_safe("keyword", keyword)?;
    }

    let language = language
        .map(str::trim)
        .filter(|language| !language.is_empty());
    if language.is_some_and(|language| language.contains(['`', '\n', '\r'])) {
        bail!("language cannot contain backticks or line breaks");
    }

    Ok(EntryFields {
        title: title.to_string(),
        description: description.to_string(),
        source: source.to_string(),
        keywords,
        language: language.map(str::to_string),
        code: code.filter(|code| !code.trim().is_empty()),
    })
}

/// Table cells hold one line each; a `|` would split the cell.
fn table_safe(kind: &str, value: &str) -> Result<()> {
    if value.contains(['|', '\n', '\r']) {
        bail!("{kind} cannot contain '|' or line breaks");
    }
    Ok(())
}

pub fn handle_new(args: &NewArgs, sink_dir: &Path) -> Result<()> {
    let code = resolve_code(args.code.as_deref(), args.code_file.as_deref())?;
    let fields = build_entry_fields(
        &args.title,
        args.description.as_deref(),
        args.source.as_deref(),
        &args.keywords,
        args.language.as_deref(),
        code,
    )?;

    let id = EntryId::new();
    let rendered = render_entry(id, &fields)?;
    document::append_entry(sink_dir, &rendered)?;
    index::sync(sink_dir)?;

    println!("Created: {} [{}]", fields.title, id);
    Ok(())
}
