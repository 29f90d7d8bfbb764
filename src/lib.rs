//! zinc - notes kept in a single Markdown document, indexed as a tree

pub mod cli;
pub mod document;
pub mod domain;
pub mod index;
pub mod infra;
pub mod parser;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_find, handle_init, handle_new, handle_remove, handle_sync,
        handle_update,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Init(args) => handle_init(args),
        Command::Completions(args) => handle_completions(args),
        Command::Sync => handle_sync(&sink_dir(&cli)?),
        Command::New(args) => handle_new(args, &sink_dir(&cli)?),
        Command::Find(args) => handle_find(args, &sink_dir(&cli)?),
        Command::Update(args) => handle_update(args, &sink_dir(&cli)?),
        Command::Remove(args) => handle_remove(args, &sink_dir(&cli)?),
    }
}

/// Resolves the sink directory for commands that operate on one.
fn sink_dir(cli: &Cli) -> Result<PathBuf> {
    let config = Config::load()?;
    config.sink_dir(cli.dir.as_ref())
}
