//! Update command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::new::build_entry_fields;
use super::{report_remaining, resolve_code};
use crate::cli::UpdateArgs;
use crate::document::{Document, render_entry};
use crate::domain::{Entry, EntryId};
use crate::index;

pub fn handle_update(args: &UpdateArgs, sink_dir: &Path) -> Result<()> {
    let tree = index::load(sink_dir)?;
    let matches = index::search(&tree, args.field, &args.value);
    let Some((old, parent_key)) = matches.iter().next() else {
        bail!("no entry matches {} '{}'", args.field, args.value);
    };

    let fields = merged_fields(args, old)?;
    let id = EntryId::new();
    let rendered = render_entry(id, &fields)?;

    // One load and one save: the old section disappears and the new one
    // lands in the same staged write.
    let mut document = Document::load(sink_dir)?;
    document.remove(parent_key)?;
    document.append(&rendered);
    document.save()?;
    index::sync(sink_dir)?;

    println!("Updated: {} [{} -> {}]", fields.title, parent_key, id);
    report_remaining(&matches);
    Ok(())
}

/// Combines the CLI arguments with the matched entry: a provided flag
/// replaces the old value, an omitted one keeps it.
pub(crate) fn merged_fields(args: &UpdateArgs, old: &Entry) -> Result<crate::document::EntryFields> {
    let title = args.title.as_deref().unwrap_or(old.title());
    let description = args.description.as_deref().unwrap_or(old.description());
    let source = args.source.as_deref().unwrap_or(old.source());
    let keywords = match &args.keywords {
        Some(keywords) => keywords.clone(),
        None => old.keywords().to_vec(),
    };

    let language = args
        .language
        .clone()
        .or_else(|| old.segment().map(|segment| segment.language().to_string()));
    let code = match resolve_code(args.code.as_deref(), args.code_file.as_deref())? {
        Some(code) => Some(code),
        None => old.segment().map(|segment| segment.body_text().to_string()),
    };

    build_entry_fields(
        title,
        Some(description),
        Some(source),
        &keywords,
        language.as_deref(),
        code,
    )
}
