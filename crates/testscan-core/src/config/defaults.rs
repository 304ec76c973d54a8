//! Default values for Testscan configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Suite Defaults
// ============================================================================

/// Default suite directories to scan, relative to the project root.
pub const DEFAULT_SUITE_DIRS: &[&str] = &[
    "test/models",
    "test/services",
    "test/widgets",
    "test/performance",
];

/// Default file-name suffix identifying a test file.
pub const DEFAULT_TEST_SUFFIX: &str = "_test.dart";

// ============================================================================
// Structure Defaults
// ============================================================================

/// Default files that must exist in the project.
pub const DEFAULT_REQUIRED_FILES: &[&str] = &[
    "pubspec.yaml",
    "lib/main.dart",
    "test/models/game_model_test.dart",
    "lib/models/game_model.dart",
];

// ============================================================================
// Dependency Defaults
// ============================================================================

/// Default manifest file to probe for dependency declarations.
pub const DEFAULT_MANIFEST_FILE: &str = "pubspec.yaml";

/// Default dependency markers that must appear in the manifest.
pub const DEFAULT_REQUIRED_DEPS: &[&str] = &[
    "flutter:",
    "firebase_core:",
    "cloud_firestore:",
    "google_mlkit_text_recognition:",
    "camera:",
    "provider:",
];
