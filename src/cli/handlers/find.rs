//! Find command handler.

use anyhow::Result;
use std::path::Path;

use super::capitalize_first;
use crate::cli::FindArgs;
use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::domain::Entry;
use crate::index::{self, SearchMatches};

pub fn handle_find(args: &FindArgs, sink_dir: &Path) -> Result<()> {
    let tree = index::load(sink_dir)?;
    let value = args.value.as_deref().unwrap_or("");
    let matches = index::search(&tree, args.field, value);

    format_find_output(&matches, args.format)
}

/// Format and print matched entries.
fn format_find_output(matches: &SearchMatches, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No matching entries found.");
            } else {
                for (position, (entry, _)) in matches.iter().enumerate() {
                    if position > 0 {
                        println!();
                    }
                    print_entry(entry);
                }
                println!();
                println!("{} match(es)", matches.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<EntryListing> = matches
                .iter()
                .map(|(entry, parent_key)| EntryListing::from_match(entry, parent_key))
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Prints one entry: title, description, source line, and code block.
fn print_entry(entry: &Entry) {
    println!("{}", capitalize_first(entry.title()));
    if !entry.description().is_empty() {
        println!("{}", entry.description());
    }
    if !entry.source().is_empty() {
        println!("Source: {}", entry.source());
    }
    if let Some(segment) = entry.segment() {
        println!("```{}", segment.language());
        print!("{}", segment.body_text());
        if !segment.body_text().ends_with('\n') {
            println!();
        }
        println!("```");
    }
}
