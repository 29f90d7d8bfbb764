//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic entry creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod entry;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::ZincCommand;
#[allow(unused_imports)]
pub use entry::TestEntry;
#[allow(unused_imports)]
pub use env::TestEnv;
