//! File I/O helpers shared by the index store and document editor.

mod fs;

pub use fs::{FsError, create_dir_all, read_utf8, scan_markdown_files, write_staged};
