use std::fs;

use tempfile::TempDir;
use testscan_core::{check_dependencies, missing_required_files};

fn required(files: &[&str]) -> Vec<String> {
    files.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_all_files_present() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pubspec.yaml"), "name: app").unwrap();
    fs::create_dir_all(temp.path().join("lib")).unwrap();
    fs::write(temp.path().join("lib/main.dart"), "void main() {}").unwrap();

    let missing = missing_required_files(temp.path(), &required(&["pubspec.yaml", "lib/main.dart"]));
    assert!(missing.is_empty());
}

#[test]
fn test_missing_files_listed_in_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pubspec.yaml"), "name: app").unwrap();

    let missing = missing_required_files(
        temp.path(),
        &required(&["lib/main.dart", "pubspec.yaml", "lib/models/game_model.dart"]),
    );
    assert_eq!(missing, vec!["lib/main.dart", "lib/models/game_model.dart"]);
}

#[test]
fn test_all_dependencies_declared() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pubspec.yaml"),
        "dependencies:\n  flutter:\n    sdk: flutter\n  provider: ^6.0.0\n",
    )
    .unwrap();

    let report = check_dependencies(temp.path(), "pubspec.yaml", &required(&["flutter:", "provider:"]));
    assert!(report.manifest_found);
    assert!(report.missing.is_empty());
    assert!(report.ok());
}

#[test]
fn test_missing_dependencies_reported_without_colon() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pubspec.yaml"), "dependencies:\n  flutter:\n").unwrap();

    let report = check_dependencies(
        temp.path(),
        "pubspec.yaml",
        &required(&["flutter:", "camera:", "provider:"]),
    );
    assert!(report.manifest_found);
    assert_eq!(report.missing, vec!["camera", "provider"]);
    assert!(!report.ok());
}

#[test]
fn test_missing_manifest_short_circuits() {
    let temp = TempDir::new().unwrap();

    let report = check_dependencies(
        temp.path(),
        "pubspec.yaml",
        &required(&["flutter:", "firebase_core:", "camera:"]),
    );
    assert!(!report.manifest_found);
    assert_eq!(report.missing, vec!["flutter", "firebase_core", "camera"]);
    assert!(!report.ok());
}
