//! Sink bootstrap command handler.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;
use crate::cli::config::Config;
use crate::document::{Document, document_path};
use crate::index::{memos_dir, snapshot_path};
use crate::infra;

pub fn handle_init(args: &InitArgs) -> Result<()> {
    // The sink root must exist before it can be canonicalized into an
    // absolute path for the config file.
    infra::create_dir_all(&args.path)?;
    let sink_dir = fs::canonicalize(&args.path)
        .with_context(|| format!("failed to resolve sink path {}", args.path.display()))?;

    create_sink_layout(&sink_dir)?;

    let config = Config {
        path: Some(sink_dir.clone()),
    };
    config.save()?;

    println!("Initialized sink at {}", sink_dir.display());
    println!("  config: {}", Config::config_path().display());
    Ok(())
}

/// Creates `memos/` and `memos/.meta/` and seeds the canonical document
/// with its title line when absent.
pub(crate) fn create_sink_layout(sink_dir: &Path) -> Result<()> {
    infra::create_dir_all(&memos_dir(sink_dir))?;
    if let Some(meta_dir) = snapshot_path(sink_dir).parent() {
        infra::create_dir_all(meta_dir)?;
    }

    if !document_path(sink_dir).exists() {
        Document::load(sink_dir)?.save()?;
    }
    Ok(())
}
