//! Bundle inclusion filter
//!
//! Markers are matched as substrings of the forward-slash relative path.
//! The override marker wins over the exclusion marker when both appear in
//! the same path, so `mbt/physics.go` survives while `bt/joint.go` does not.

/// Marker set driving bundle inclusion
#[derive(Debug, Clone)]
pub struct BundleFilter {
    /// Path marker excluding a subtree
    pub exclude_marker: String,
    /// Path marker re-including files under an excluded subtree
    pub override_marker: String,
    /// Required file name extension
    pub extension: String,
    /// File name marker excluding test files
    pub test_marker: String,
}

impl Default for BundleFilter {
    fn default() -> Self {
        Self {
            exclude_marker: "bt".to_string(),
            override_marker: "mbt".to_string(),
            extension: ".go".to_string(),
            test_marker: "_test".to_string(),
        }
    }
}

impl BundleFilter {
    /// Decide whether a root-relative path belongs in the bundle
    pub fn includes(&self, rel_path: &str) -> bool {
        if rel_path.contains(&self.exclude_marker) && !rel_path.contains(&self.override_marker) {
            return false;
        }

        let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);
        if !file_name.ends_with(&self.extension) {
            return false;
        }
        if file_name.contains(&self.test_marker) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_source_file_included() {
        let filter = BundleFilter::default();
        assert!(filter.includes("a.go"));
        assert!(filter.includes("pkg/domain/model.go"));
    }

    #[test]
    fn test_test_files_excluded() {
        let filter = BundleFilter::default();
        assert!(!filter.includes("a_test.go"));
        assert!(!filter.includes("pkg/domain/model_test.go"));
    }

    #[test]
    fn test_wrong_extension_excluded() {
        let filter = BundleFilter::default();
        assert!(!filter.includes("README.md"));
        assert!(!filter.includes("app/app_config.json"));
        // Extension must be a suffix of the file name, not merely present
        assert!(!filter.includes("main.go.bak"));
    }

    #[test]
    fn test_excluded_subtree() {
        let filter = BundleFilter::default();
        assert!(!filter.includes("bt/b.go"));
        assert!(!filter.includes("pkg/bt/physics.go"));
    }

    #[test]
    fn test_override_wins_over_exclusion() {
        let filter = BundleFilter::default();
        assert!(filter.includes("mbt/c.go"));
        assert!(filter.includes("pkg/mbt/physics.go"));
    }

    #[test]
    fn test_test_marker_wins_over_extension() {
        // Rule 3 applies regardless of rule 2
        let filter = BundleFilter::default();
        assert!(!filter.includes("mbt/physics_test.go"));
    }

    #[test]
    fn test_custom_markers() {
        let filter = BundleFilter {
            exclude_marker: "vendor".to_string(),
            override_marker: "vendor_keep".to_string(),
            extension: ".rs".to_string(),
            test_marker: "_spec".to_string(),
        };
        assert!(filter.includes("src/lib.rs"));
        assert!(!filter.includes("vendor/dep/lib.rs"));
        assert!(filter.includes("vendor_keep/dep/lib.rs"));
        assert!(!filter.includes("src/lib_spec.rs"));
    }
}
