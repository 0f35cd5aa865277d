//! Shared test fixtures for integration tests.
//!
//! [`TempWorkspace`] gives each test its own directory holding a dictionary
//! and a corpus file, removed when the fixture is dropped.

use lexiscan::Config;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small dictionary covering most of [`SAMPLE_CORPUS`].
pub const SAMPLE_DICTIONARY: &str = "\
a and at bearer by came carried door frodo's gate hand he his in into it kept
last left long looked not of on one ring sam said shadow stood that the then to
was went where wizard with
";

/// A corpus with known proximity structure around the word "ring".
pub const SAMPLE_CORPUS: &str = "\
Frodo kept the Ring in his hand. Sam stood at the door; Gandalf said nothing.
\"The Ring-bearer went into the shadow,\" said Gandalf. Then Frodo left.
Gollum came last, long after, and looked not once at the gate.
";

/// A temporary workspace directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// A config pointing at `dictionary.txt` and `corpus.txt` in this workspace.
    pub fn config(&self) -> Config {
        Config {
            dictionary: self.root.join("dictionary.txt"),
            corpus: self.root.join("corpus.txt"),
            ..Config::default()
        }
    }
}

/// Workspace seeded with [`SAMPLE_DICTIONARY`] and [`SAMPLE_CORPUS`].
#[fixture]
pub fn sample_workspace() -> TempWorkspace {
    lexiscan::tracing::init_test();
    let workspace = TempWorkspace::new();
    workspace.create_file("dictionary.txt", SAMPLE_DICTIONARY);
    workspace.create_file("corpus.txt", SAMPLE_CORPUS);
    workspace
}
