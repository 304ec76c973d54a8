pub mod analyzer;
pub mod checks;
pub mod config;
pub mod report;
pub mod scanner;

pub use analyzer::{analyze, TestFileRecord, Verdict};
pub use checks::{check_dependencies, missing_required_files, DependencyReport};
pub use config::Config;
pub use report::{RunReport, StatusTier, SuiteReport};
pub use scanner::{SuiteOutcome, Validator};
