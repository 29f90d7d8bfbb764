//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::index::SearchField;
use output::OutputFormat;

/// zinc - notes kept in a single Markdown document, indexed as a tree
#[derive(Parser, Debug)]
#[command(name = "zinc", version, about, long_about = None)]
pub struct Cli {
    /// Sink directory (overrides the configured ~/.zincrc path)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the sink directory and create its layout
    Init(InitArgs),

    /// Rebuild the index from the Markdown sources
    Sync,

    /// Add a new entry to the document
    New(NewArgs),

    /// Find entries by field value
    Find(FindArgs),

    /// Replace the first matching entry with new content
    Update(UpdateArgs),

    /// Remove the first matching entry
    Remove(RemoveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory that will hold the memos tree (created if missing)
    pub path: PathBuf,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Entry title
    #[arg(short = 't', long)]
    pub title: String,

    /// Short description
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// Source reference, usually a URL
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Keywords the entry is found by (comma-separated, repeatable)
    #[arg(short = 'k', long, value_delimiter = ',', required = true)]
    pub keywords: Vec<String>,

    /// Language tag for the code snippet's fence
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Inline code snippet
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// File whose contents become the code snippet
    #[arg(long)]
    pub code_file: Option<PathBuf>,
}

/// Arguments for the `find` command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Value to match; omit to list every entry
    pub value: Option<String>,

    /// Entry field to match against (title, description, source, keywords)
    #[arg(long, default_value_t = SearchField::Keywords)]
    pub field: SearchField,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Value identifying the entry to replace
    pub value: String,

    /// Entry field to match against (title, description, source, keywords)
    #[arg(long, default_value_t = SearchField::Keywords)]
    pub field: SearchField,

    /// New title (keeps the old one when omitted)
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// New description (keeps the old one when omitted)
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// New source reference (keeps the old one when omitted)
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// New keywords (comma-separated; keeps the old ones when omitted)
    #[arg(short = 'k', long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,

    /// Language tag for the code snippet's fence
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// New inline code snippet (keeps the old one when omitted)
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// File whose contents become the code snippet
    #[arg(long)]
    pub code_file: Option<PathBuf>,
}

/// Arguments for the `remove` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Value identifying the entry to remove
    pub value: String,

    /// Entry field to match against (title, description, source, keywords)
    #[arg(long, default_value_t = SearchField::Keywords)]
    pub field: SearchField,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
