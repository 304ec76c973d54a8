//! Terminal rendering for run reports and single-file records.
//!
//! The core exposes data only; every symbol, divider, and line of text
//! lives here.

use testscan_core::{RunReport, StatusTier, SuiteOutcome, TestFileRecord};

const DIVIDER_WIDTH: usize = 50;

fn divider() -> String {
    "=".repeat(DIVIDER_WIDTH)
}

/// Prints the full run: per-suite sections followed by the report block.
pub fn render_run(report: &RunReport) {
    for outcome in &report.suites {
        render_suite(outcome);
    }
    render_report(report);
}

fn render_suite(outcome: &SuiteOutcome) {
    println!("\n📝 Analyzing {}...", outcome.name);

    if !outcome.found {
        println!("❌ Test directory not found: {}", outcome.name);
        return;
    }

    for record in &outcome.records {
        if record.verdict.is_pass() {
            println!("✅ {}: {} tests", record.file, record.test_count);
            for test in &record.tests {
                println!("   ✓ {}", test);
            }
        } else {
            println!("❌ {}: Structure issues detected", record.file);
        }
    }
}

fn render_report(report: &RunReport) {
    println!("\n{}", divider());
    println!("TEST REPORT");
    println!("{}", divider());
    println!("Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S"));

    println!("\n📊 Test Summary:");
    println!("   Total Tests: {}", report.summary.total_tests);
    println!("   Passed: {}", report.summary.passed_tests);
    println!("   Failed: {}", report.summary.failed_tests);

    if let Some(coverage) = report.summary.coverage() {
        println!("   Coverage: {:.1}%", coverage);
        if let Some(tier) = report.summary.tier() {
            println!("   Status: {} {}", tier_symbol(tier), tier.display_name());
        }
    }

    println!("\n🏗️  Project Structure:");
    if report.missing_files.is_empty() {
        println!("   ✅ All required files present");
    } else {
        println!("   ❌ Missing files:");
        for file in &report.missing_files {
            println!("      - {}", file);
        }
    }

    println!("\n📦 Dependencies:");
    if report.dependencies.ok() {
        println!("   ✅ All required dependencies declared");
    } else {
        println!("   ❌ Missing dependencies:");
        for dep in &report.dependencies.missing {
            println!("      - {}", dep);
        }
    }

    println!("\n{}", divider());
}

fn tier_symbol(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Excellent => "✅",
        StatusTier::Good => "⚠️ ",
        StatusTier::NeedsImprovement => "❌",
    }
}

/// Prints a single file's record, for `testscan analyze`.
pub fn render_record(record: &TestFileRecord) {
    println!("{}: {}", record.file, record.verdict.display_name());
    println!("   Tests: {}", record.test_count);
    for test in &record.tests {
        println!("      ✓ {}", test);
    }
    if !record.groups.is_empty() {
        println!("   Groups: {}", record.groups.join(", "));
    }
    println!("   Setup: {}", yes_no(record.has_setup));
    println!("   Teardown: {}", yes_no(record.has_teardown));
    println!("   Assertions: {}", yes_no(record.has_assertions));
    println!("   Framework import: {}", yes_no(record.has_framework_import));
    println!("   Domain import: {}", yes_no(record.has_domain_import));
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
