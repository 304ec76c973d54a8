//! Structural existence checks against the project layout and manifest.
//!
//! Both checks are single-pass existence probes with no retry or
//! partial-success semantics, independent of the test-count pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Result of the manifest dependency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Whether the manifest file exists at all.
    pub manifest_found: bool,
    /// Required dependency names not found in the manifest. When the
    /// manifest is missing, every required dependency is listed here.
    pub missing: Vec<String>,
}

impl DependencyReport {
    /// True iff the manifest exists and declares every required dependency.
    pub fn ok(&self) -> bool {
        self.manifest_found && self.missing.is_empty()
    }
}

/// Returns the required project files that do not exist under `root`,
/// in configuration order.
pub fn missing_required_files(root: &Path, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|file| !root.join(file).exists())
        .cloned()
        .collect()
}

/// Checks that every required dependency marker appears in the manifest.
///
/// Markers are matched by plain substring containment against the manifest
/// text; reported names have a trailing `:` stripped. A missing manifest
/// short-circuits to "check failed, everything missing".
pub fn check_dependencies(root: &Path, manifest: &str, required: &[String]) -> DependencyReport {
    let manifest_path = root.join(manifest);

    let content = match fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(_) => {
            return DependencyReport {
                manifest_found: false,
                missing: required
                    .iter()
                    .map(|dep| dep.trim_end_matches(':').to_string())
                    .collect(),
            };
        }
    };

    let missing = required
        .iter()
        .filter(|dep| !content.contains(dep.as_str()))
        .map(|dep| dep.trim_end_matches(':').to_string())
        .collect();

    DependencyReport {
        manifest_found: true,
        missing,
    }
}
