//! Sync command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::index;

pub fn handle_sync(sink_dir: &Path) -> Result<()> {
    let tree = index::sync(sink_dir)
        .with_context(|| format!("failed to sync index for {}", sink_dir.display()))?;

    println!("Indexed {} entries", tree.entry_count());
    Ok(())
}
