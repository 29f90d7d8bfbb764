//! Persisted index snapshots: rebuild from memo sources, load for reads.

use crate::index::IndexNode;
use crate::infra::{FsError, create_dir_all, read_utf8, scan_markdown_files, write_staged};
use crate::parser::{ParseError, parse_document};
use std::path::{Path, PathBuf};
use thiserror::Error;

const MEMOS_DIR: &str = "memos";
const SNAPSHOT_DIR: &str = ".meta";
const SNAPSHOT_FILE: &str = "memo.json";

/// Errors that can occur while syncing or loading the index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// No snapshot exists for this sink yet.
    #[error("no index snapshot at {path} (run `zinc sync` first)")]
    NotFound { path: PathBuf },

    /// A memo source file failed to parse during sync.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The snapshot on disk is not a valid index tree.
    #[error("invalid index snapshot at {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory tree could not be serialized.
    #[error("failed to serialize index snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] FsError),
}

/// Returns the memo source directory for a sink.
pub fn memos_dir(sink_dir: &Path) -> PathBuf {
    sink_dir.join(MEMOS_DIR)
}

/// Returns the snapshot file location for a sink.
pub fn snapshot_path(sink_dir: &Path) -> PathBuf {
    memos_dir(sink_dir).join(SNAPSHOT_DIR).join(SNAPSHOT_FILE)
}

/// Rebuilds the index from every `.md` file under `<sink>/memos` and
/// persists the result as the sink's snapshot.
///
/// Files are visited in path order and shallow-merged: a later file's
/// top-level keys overwrite earlier ones wholesale, so the last-wins
/// outcome is reproducible across runs. Hidden files and the `.meta/`
/// snapshot directory are never scanned.
///
/// # Errors
///
/// Fails on the first unreadable or unparseable source file, and on any
/// failure writing the snapshot. A failed sync leaves the previous
/// snapshot in place.
pub fn sync(sink_dir: &Path) -> Result<IndexNode, IndexError> {
    let memos = memos_dir(sink_dir);
    let mut tree = IndexNode::branch();
    for relative in scan_markdown_files(&memos)? {
        let path = memos.join(&relative);
        let text = read_utf8(&path)?;
        let parsed = parse_document(&text).map_err(|source| IndexError::Parse { path, source })?;
        tree.merge_shallow(parsed);
    }

    let json = serde_json::to_string_pretty(&tree).map_err(IndexError::Serialize)?;
    create_dir_all(&memos.join(SNAPSHOT_DIR))?;
    write_staged(&snapshot_path(sink_dir), &json)?;

    Ok(tree)
}

/// Loads the persisted snapshot for a sink.
///
/// The snapshot is a cache of the last sync; it goes stale the moment the
/// canonical document is edited and is only refreshed by [`sync`].
///
/// # Errors
///
/// Returns [`IndexError::NotFound`] when no snapshot exists (no sync has
/// run yet) and [`IndexError::Snapshot`] when the file is not a valid tree.
pub fn load(sink_dir: &Path) -> Result<IndexNode, IndexError> {
    let path = snapshot_path(sink_dir);
    let text = match read_utf8(&path) {
        Ok(text) => text,
        Err(FsError::NotFound { path }) => return Err(IndexError::NotFound { path }),
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&text).map_err(|source| IndexError::Snapshot { path, source })
}
