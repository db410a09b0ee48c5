//! Common test utilities for Mmake integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write an app config with the given name and version
    pub fn write_app_config(&self, name: &str, version: &str) {
        self.write_file(
            "app/app_config.json",
            &format!(r#"{{"AppName":"{}","Version":"{}"}}"#, name, version),
        );
    }

    /// Write the bundler fixture tree from the filter rules
    pub fn write_source_fixture(&self) {
        self.write_file("a.go", "package main\n");
        self.write_file("a_test.go", "package main\n");
        self.write_file("bt/b.go", "package bt\n");
        self.write_file("mbt/c.go", "package mbt\n");
    }
}
