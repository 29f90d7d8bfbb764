//! Command handlers for the CLI.

mod completions;
mod find;
mod init;
mod new;
mod remove;
mod sync;
mod update;


use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::index::SearchMatches;

// Re-export public items
pub use completions::handle_completions;
pub use find::handle_find;
pub use init::handle_init;
pub use new::{build_entry_fields, handle_new};
pub use remove::handle_remove;
pub use sync::handle_sync;
pub use update::handle_update;

// Re-export for tests
#[cfg(test)]
pub(crate) use update::merged_fields;

// ===========================================
// Shared Utilities
// ===========================================

/// Resolves the code snippet from `--code` / `--code-file`.
pub(crate) fn resolve_code(code: Option<&str>, code_file: Option<&Path>) -> Result<Option<String>> {
    match code_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read code file {}", path.display()))?;
            Ok(Some(text))
        }
        None => Ok(code.map(str::to_string)),
    }
}

/// Uppercases the first character of a title for display.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Mutating commands act on the first match only; point at the rest.
pub(crate) fn report_remaining(matches: &SearchMatches) {
    if matches.len() > 1 {
        println!("{} more match(es) left unchanged:", matches.len() - 1);
        for (entry, parent_key) in matches.iter().skip(1) {
            println!("  {} [{}]", entry.title(), parent_key);
        }
    }
}
