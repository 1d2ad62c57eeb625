//! Common test utilities for bucketsync integration tests.
//!
//! - `TestSite`: temp directory pre-populated with site files
//! - `run_cli`: run the bucketsync binary and capture its output

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Bytes of the `robots.txt` fixture
pub const ROBOTS_TXT: &str = "User-agent: *";

/// SHA-256 of [`ROBOTS_TXT`]
pub const ROBOTS_TXT_SHA256: &str =
    "d9066d29c1dfed62e1bbde2c102079a5ccc0c1e9f669644fd89fd652cdc156bb";

/// SHA-256 of `body {}`
pub const STYLE_CSS_SHA256: &str =
    "62368a1a29259b30bac235c0e75dc700c9b3bacf1513ad5708e4fe4a6c0d6560";

/// Isolated directory tree for manifest tests
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Builder: write a file (parents created)
    pub fn with_file(self, relative: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Captured result of a CLI run
#[derive(Debug)]
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run the bucketsync binary in `cwd` with a clean environment for our variables.
pub fn run_cli(cwd: &Path, args: &[&str]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_bucketsync"))
        .args(args)
        .current_dir(cwd)
        .env_remove("BUCKETSYNC_PURGE")
        .env_remove("BUCKETSYNC_TEXT_ENCODING")
        .env_remove("BUCKETSYNC_CONCURRENCY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    CliOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
