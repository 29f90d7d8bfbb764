//! Remove command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::report_remaining;
use crate::cli::RemoveArgs;
use crate::document;
use crate::index;

pub fn handle_remove(args: &RemoveArgs, sink_dir: &Path) -> Result<()> {
    let tree = index::load(sink_dir)?;
    let matches = index::search(&tree, args.field, &args.value);
    let Some((entry, parent_key)) = matches.iter().next() else {
        bail!("no entry matches {} '{}'", args.field, args.value);
    };

    document::remove_entry(sink_dir, parent_key)?;
    index::sync(sink_dir)?;

    println!("Removed: {} [{}]", entry.title(), parent_key);
    report_remaining(&matches);
    Ok(())
}
