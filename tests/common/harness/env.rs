//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{TestEntry, ZincCommand};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zinc::index::IndexNode;

/// Isolated test environment with a temporary sink directory.
///
/// Creates a temp directory that is automatically cleaned up on drop,
/// holding a fake home directory (for `~/.zincrc`) next to a fully laid
/// out sink. Provides methods for adding test entries and syncing the
/// index without going through the binary.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home_dir: PathBuf,
    sink_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with the sink layout in
    /// place.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home_dir = temp_dir.path().join("home");
        let sink_dir = temp_dir.path().join("sink");

        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");
        let meta_dir = zinc::index::snapshot_path(&sink_dir)
            .parent()
            .expect("snapshot path has a parent")
            .to_path_buf();
        std::fs::create_dir_all(&meta_dir).expect("Failed to create sink layout");

        Self {
            _temp_dir: temp_dir,
            home_dir,
            sink_dir,
        }
    }

    /// Returns the path to the sink directory.
    pub fn sink_dir(&self) -> &Path {
        &self.sink_dir
    }

    /// Returns the path to the fake home directory.
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Returns a scratch path inside the temp directory that does not
    /// exist yet.
    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self._temp_dir.path().join(name)
    }

    /// Returns the path of the canonical document.
    pub fn document_path(&self) -> PathBuf {
        zinc::document::document_path(&self.sink_dir)
    }

    /// Returns the path of the persisted index snapshot.
    pub fn snapshot_path(&self) -> PathBuf {
        zinc::index::snapshot_path(&self.sink_dir)
    }

    /// Appends a test entry to the canonical document.
    pub fn add_entry(&self, entry: &TestEntry) {
        zinc::document::append_entry(&self.sink_dir, &entry.to_markdown())
            .expect("Failed to append test entry");
    }

    /// Replaces the canonical document with the given text.
    pub fn write_document(&self, text: &str) {
        std::fs::write(self.document_path(), text).expect("Failed to write document");
    }

    /// Reads the canonical document.
    pub fn read_document(&self) -> String {
        std::fs::read_to_string(self.document_path()).expect("Failed to read document")
    }

    /// Writes an extra Markdown source file into the memos directory.
    pub fn write_memo_file(&self, name: &str, content: &str) -> PathBuf {
        let path = zinc::index::memos_dir(&self.sink_dir).join(name);
        std::fs::write(&path, content).expect("Failed to write memo file");
        path
    }

    /// Rebuilds the index snapshot from the Markdown sources.
    pub fn sync_index(&self) -> Result<IndexNode> {
        Ok(zinc::index::sync(&self.sink_dir)?)
    }

    /// Creates a ZincCommand configured for this test environment.
    pub fn cmd(&self) -> ZincCommand {
        ZincCommand::new().home(&self.home_dir).dir(&self.sink_dir)
    }

    /// Creates a ZincCommand with only the fake home, no `--dir`.
    ///
    /// Commands run this way see whatever `~/.zincrc` the test wrote (or
    /// none at all).
    pub fn cmd_unconfigured(&self) -> ZincCommand {
        ZincCommand::new().home(&self.home_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_creates_sink_layout() {
        let env = TestEnv::new();
        assert!(env.sink_dir().join("memos").is_dir());
        assert!(env.sink_dir().join("memos").join(".meta").is_dir());
        assert!(env.home_dir().is_dir());
    }

    #[test]
    fn env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.sink_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn env_provides_command_with_dir() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.sink_dir().to_string_lossy());
    }

    #[test]
    fn env_add_entry_creates_document() {
        let env = TestEnv::new();
        env.add_entry(&TestEntry::new("first").keyword("k"));

        let text = env.read_document();
        assert!(text.starts_with("# zinc\n"));
        assert!(text.contains("## 1000"));
        assert!(text.contains("| first |"));
    }

    #[test]
    fn env_sync_index_builds_snapshot() {
        let env = TestEnv::new();
        env.add_entry(&TestEntry::new("first").keyword("k"));

        let tree = env.sync_index().expect("Should sync index");

        assert_eq!(tree.entry_count(), 1);
        assert!(env.snapshot_path().exists());
    }
}
