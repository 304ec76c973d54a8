use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use testscan_core::{analyze, Config, Validator};

mod render;

#[derive(Parser)]
#[command(name = "testscan")]
#[command(about = "Static structural validator for Flutter test suites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the configured test suites and print a report
    Run {
        /// Project root to validate
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Path to a testscan.toml config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Analyze a single test file and print its record
    Analyze {
        /// Test file to analyze
        file: PathBuf,
        /// Emit the record as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a default testscan.toml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { path, config, json } => run(&path, config.as_deref(), json),
        Commands::Analyze { file, json } => analyze_file(&file, json),
        Commands::Init => init(),
    }
}

fn load_config(path: Option<&Path>) -> Config {
    let result = match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };

    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(path: &Path, config: Option<&Path>, json: bool) {
    let config = load_config(config);
    let report = Validator::with_config(path, config).run();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("🔍 Testscan");
    println!("{}", "=".repeat(50));
    render::render_run(&report);
    // Verdict failures are reported, never surfaced as a process failure.
}

fn analyze_file(file: &Path, json: bool) {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", file.display(), e);
            process::exit(1);
        }
    };

    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file.display().to_string());
    let record = analyze(name, &content);

    if json {
        match serde_json::to_string_pretty(&record) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize record: {}", e);
                process::exit(1);
            }
        }
    } else {
        render::render_record(&record);
    }
}

fn init() {
    let path = Path::new("testscan.toml");
    if path.exists() {
        println!("testscan.toml already exists, leaving it untouched.");
        return;
    }

    match fs::write(path, Config::default_config_string()) {
        Ok(()) => println!("Created testscan.toml with default configuration."),
        Err(e) => {
            eprintln!("Error: failed to write testscan.toml: {}", e);
            process::exit(1);
        }
    }
}
