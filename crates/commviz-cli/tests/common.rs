#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// `commviz` bound to a throwaway data directory
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Seed `progress.json` as an earlier run would have saved it
    pub fn write_progress(&self, json: &str) {
        std::fs::write(self.dir.path().join("progress.json"), json).unwrap();
    }

    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("commviz").unwrap();
        cmd.arg("--data-dir").arg(self.dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
