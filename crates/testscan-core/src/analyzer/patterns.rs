//! Patterns and marker substrings for test-file analysis.

/// Pattern matching a test declaration with a quoted name argument.
///
/// Single and double quotes are interchangeable as both opener and
/// terminator, so `test('name")` still captures `name`. This mirrors the
/// permissiveness of the original validator and is relied on by callers.
pub const TEST_CALL_PATTERN: &str = r#"test\(['"](.+?)['"]"#;

/// Pattern matching a group declaration with a quoted name argument.
pub const GROUP_CALL_PATTERN: &str = r#"group\(['"](.+?)['"]"#;

/// Marker for a setup fixture.
pub const SETUP_MARKER: &str = "setUp(";

/// Marker for a teardown fixture.
pub const TEARDOWN_MARKER: &str = "tearDown(";

/// Marker for an assertion call.
pub const ASSERTION_MARKER: &str = "expect(";

/// Name of the testing framework package a test file must import.
pub const FRAMEWORK_IMPORT_MARKER: &str = "flutter_test";

/// Path fragments that indicate a domain import. Any one suffices.
pub const DOMAIN_IMPORT_MARKERS: &[&str] = &["models/", "services/"];
