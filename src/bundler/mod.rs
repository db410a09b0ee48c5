//! Source tree bundling
//!
//! Walks a directory tree, applies the inclusion filter to each regular
//! file, and collects a relative-path to file-content mapping. The mapping
//! is serialized as a single pretty-printed JSON document; `serde_json`
//! writes raw UTF-8, so non-ASCII content survives byte-exactly.
//!
//! A file that matches the filter but cannot be read aborts the whole scan;
//! skipping it would silently drop content from the bundle.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{self, Result};

pub mod filter;

pub use filter::BundleFilter;

/// Mapping from root-relative path (forward separators) to file content
pub type FileBundle = BTreeMap<String, String>;

/// A file selected for bundling
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the scanned root, forward separators
    pub rel_path: String,
    /// Absolute path on disk
    pub abs_path: PathBuf,
}

/// Enumerate the files under `root` that pass the filter
///
/// Traversal order is whatever the filesystem walk yields; the bundle keys
/// do not depend on it.
pub fn discover(root: &Path, filter: &BundleFilter) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
            error::fs::read_failed(path, e.to_string())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        if filter.includes(&rel_path) {
            files.push(SourceFile {
                rel_path,
                abs_path: entry.path().to_path_buf(),
            });
        }
    }

    Ok(files)
}

/// Read one selected file's full text
pub fn read_source(file: &SourceFile) -> Result<String> {
    std::fs::read_to_string(&file.abs_path)
        .map_err(|e| error::fs::read_failed(&file.rel_path, e.to_string()))
}

/// Read discovered files into a bundle, reporting each path before its read
///
/// The hook drives progress display; a read failure aborts with the file's
/// relative path in the error.
pub fn read_all(files: Vec<SourceFile>, mut on_file: impl FnMut(&str)) -> Result<FileBundle> {
    let mut bundle = FileBundle::new();
    for file in files {
        on_file(&file.rel_path);
        let content = read_source(&file)?;
        bundle.insert(file.rel_path, content);
    }
    Ok(bundle)
}

/// Scan a tree into a bundle in one step
pub fn scan(root: &Path, filter: &BundleFilter) -> Result<FileBundle> {
    read_all(discover(root, filter)?, |_| {})
}

/// Serialize a bundle as pretty JSON to the output path
pub fn write_bundle(bundle: &FileBundle, output: &Path) -> Result<()> {
    let display_path = output.display().to_string();

    let json = serde_json::to_string_pretty(bundle)
        .map_err(|e| error::fs::write_failed(&display_path, e.to_string()))?;

    std::fs::write(output, json)
        .map_err(|e| error::fs::write_failed(&display_path, e.to_string()))?;

    Ok(())
}
