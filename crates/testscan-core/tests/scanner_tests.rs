use std::fs;
use std::path::Path;

use tempfile::TempDir;
use testscan_core::config::{Config, SuiteConfig};
use testscan_core::Validator;

const PASSING_TEST: &str = r#"
import 'package:flutter_test/flutter_test.dart';
import '../../lib/models/game_model.dart';

void main() {
  group('Game', () {
    test('creates a game', () {
      expect(1, 1);
    });
    test('updates a game', () {
      expect(2, 2);
    });
  });
}
"#;

const FAILING_TEST: &str = r#"
void main() {
  test('does nothing', () {});
}
"#;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn project_with_suite(suite: &str) -> (TempDir, Validator) {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(suite)).unwrap();

    let config = Config {
        suites: SuiteConfig {
            dirs: vec![suite.to_string()],
            ..SuiteConfig::default()
        },
        ..Config::default()
    };
    let validator = Validator::with_config(temp.path(), config);
    (temp, validator)
}

#[test]
fn test_scan_suite_analyzes_matching_files() {
    let (temp, validator) = project_with_suite("test/models");
    let suite_dir = temp.path().join("test/models");
    write_file(&suite_dir, "game_model_test.dart", PASSING_TEST);
    write_file(&suite_dir, "helper.dart", "// not a test file");

    let outcome = validator.scan_suite("test/models");
    assert!(outcome.found);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].file, "game_model_test.dart");
    assert_eq!(outcome.records[0].test_count, 2);
}

#[test]
fn test_scan_suite_orders_by_file_name() {
    let (temp, validator) = project_with_suite("test/models");
    let suite_dir = temp.path().join("test/models");
    write_file(&suite_dir, "b_model_test.dart", FAILING_TEST);
    write_file(&suite_dir, "a_model_test.dart", FAILING_TEST);
    write_file(&suite_dir, "c_model_test.dart", FAILING_TEST);

    let outcome = validator.scan_suite("test/models");
    let names: Vec<&str> = outcome.records.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(
        names,
        vec!["a_model_test.dart", "b_model_test.dart", "c_model_test.dart"]
    );
}

#[test]
fn test_gitignore_rules_do_not_hide_test_files() {
    let (temp, validator) = project_with_suite("test/models");
    fs::create_dir_all(temp.path().join(".git")).unwrap();
    fs::write(temp.path().join(".gitignore"), "*_test.dart\n").unwrap();
    write_file(&temp.path().join("test/models"), "game_model_test.dart", PASSING_TEST);

    let outcome = validator.scan_suite("test/models");
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].file, "game_model_test.dart");
}

#[test]
fn test_missing_suite_is_not_an_error() {
    let (_temp, validator) = project_with_suite("test/models");

    let outcome = validator.scan_suite("test/widgets");
    assert!(!outcome.found);
    assert!(outcome.records.is_empty());
}

#[test]
fn test_empty_suite_contributes_nothing() {
    let (_temp, validator) = project_with_suite("test/models");

    let report = validator.run();
    assert_eq!(report.summary.total_tests, 0);
    assert_eq!(report.summary.passed_tests, 0);
    assert_eq!(report.summary.failed_tests, 0);
    assert!(report.summary.coverage().is_none());
}

#[test]
fn test_run_folds_all_suites() {
    let temp = TempDir::new().unwrap();
    for suite in ["test/models", "test/services"] {
        fs::create_dir_all(temp.path().join(suite)).unwrap();
    }
    write_file(&temp.path().join("test/models"), "game_model_test.dart", PASSING_TEST);
    write_file(&temp.path().join("test/services"), "scan_service_test.dart", FAILING_TEST);

    let config = Config {
        suites: SuiteConfig {
            dirs: vec![
                "test/models".to_string(),
                "test/services".to_string(),
                "test/widgets".to_string(),
            ],
            ..SuiteConfig::default()
        },
        ..Config::default()
    };
    let report = Validator::with_config(temp.path(), config).run();

    assert_eq!(report.suites.len(), 3);
    assert!(report.suites[0].found);
    assert!(report.suites[1].found);
    assert!(!report.suites[2].found);

    assert_eq!(report.summary.total_tests, 3);
    assert_eq!(report.summary.passed_tests, 2);
    assert_eq!(report.summary.failed_tests, 1);
    assert_eq!(
        report.summary.total_tests,
        report.summary.passed_tests + report.summary.failed_tests
    );
}

#[test]
fn test_run_includes_structural_checks() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("test/models")).unwrap();

    let report = Validator::new(temp.path()).run();

    // Nothing exists in the temp project, so every default required file
    // and every default dependency is missing.
    assert_eq!(report.missing_files.len(), 4);
    assert!(!report.dependencies.manifest_found);
    assert_eq!(report.dependencies.missing.len(), 6);
}

#[test]
fn test_run_always_completes_with_failures() {
    let (temp, validator) = project_with_suite("test/models");
    write_file(&temp.path().join("test/models"), "broken_test.dart", FAILING_TEST);

    let report = validator.run();
    assert_eq!(report.summary.failed_tests, 1);
    assert_eq!(report.summary.coverage(), Some(0.0));
}
