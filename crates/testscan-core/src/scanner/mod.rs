//! Suite traversal and run orchestration.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use ignore::WalkBuilder;
use serde::Serialize;

use crate::analyzer::{analyze, TestFileRecord};
use crate::checks::{check_dependencies, missing_required_files};
use crate::config::Config;
use crate::report::{RunReport, SuiteReport};

/// The result of scanning one suite directory.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteOutcome {
    /// Suite directory, relative to the project root.
    pub name: String,
    /// Whether the directory exists. A missing suite is not an error;
    /// it simply contributes no records.
    pub found: bool,
    /// One record per analyzed test file, in file-name order.
    pub records: Vec<TestFileRecord>,
}

/// Runs the full validation pipeline over a project.
///
/// Walks each configured suite directory, analyzes every test file,
/// folds the records into a single [`SuiteReport`], and runs the two
/// structural checks. Everything is synchronous and sequential.
pub struct Validator {
    root: PathBuf,
    config: Config,
}

impl Validator {
    /// Creates a validator rooted at the given path with default config.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: Config::default(),
        }
    }

    /// Creates a validator with custom configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Scans one suite directory and analyzes every test file in it.
    ///
    /// Test files are the direct children whose name ends in the configured
    /// suffix. Unreadable files are skipped with a warning; the scan
    /// continues with the remaining files.
    pub fn scan_suite(&self, dir: &str) -> SuiteOutcome {
        let suite_path = self.root.join(dir);

        if !suite_path.is_dir() {
            return SuiteOutcome {
                name: dir.to_string(),
                found: false,
                records: Vec::new(),
            };
        }

        let mut records = Vec::new();

        // Suite membership is the suffix filter alone; gitignore rules in
        // the host project must not drop test files from analysis.
        let walker = WalkBuilder::new(&suite_path)
            .max_depth(Some(1))
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker.flatten() {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(&self.config.suites.test_suffix) {
                continue;
            }

            match fs::read_to_string(path) {
                Ok(content) => records.push(analyze(name, &content)),
                Err(e) => {
                    eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                }
            }
        }

        SuiteOutcome {
            name: dir.to_string(),
            found: true,
            records,
        }
    }

    /// Runs every configured suite plus both structural checks.
    ///
    /// Always completes: verdict failures are counted, never raised.
    pub fn run(&self) -> RunReport {
        let mut summary = SuiteReport::new();
        let mut suites = Vec::new();

        for dir in &self.config.suites.dirs {
            let outcome = self.scan_suite(dir);
            for record in &outcome.records {
                summary.record(record);
            }
            suites.push(outcome);
        }

        let missing_files =
            missing_required_files(&self.root, &self.config.structure.required_files);
        let dependencies = check_dependencies(
            &self.root,
            &self.config.dependencies.manifest,
            &self.config.dependencies.required,
        );

        RunReport {
            suites,
            summary,
            missing_files,
            dependencies,
            generated_at: Utc::now(),
        }
    }
}
