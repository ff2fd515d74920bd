//! `oxml-conformance`: Validates the namespace registry, the attribute
//! catalog and the built artifacts.
//!
//! **Usage:**
//! ```
//! oxml-conformance [--artifacts <path>] [--namespaces <table.toml>] [-v]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use oxml_conformance::{run_all, ConformancePaths};
use oxml_schema::{catalog, registry, NamespaceRegistry, RegistryConfig};
use tracing::Level;

/// Run the oxml-schema conformance suite.
#[derive(Parser)]
#[command(
    name = "oxml-conformance",
    about = "Validate the namespace registry, attribute tables and built artifacts"
)]
struct Args {
    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Extra namespaces (TOML), as given to `oxml-build`.
    #[arg(long)]
    namespaces: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let registry = load_registry(args.namespaces.as_deref())?;
    let tables = catalog::all().context("Failed to assemble the attribute catalog")?;
    let paths = ConformancePaths {
        artifacts: args.artifacts,
    };

    let report = run_all(&paths, registry, &tables)?;

    println!("oxml-schema Conformance Report");
    println!("==============================");
    println!();

    for result in &report.results {
        println!("[{}] {}: {}", result.severity.label(), result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.pass_count(),
        report.warning_count(),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_registry(namespaces: Option<&Path>) -> Result<&'static NamespaceRegistry> {
    if let Some(path) = namespaces {
        let config = RegistryConfig::load(path)
            .with_context(|| format!("Failed to load namespace table {}", path.display()))?;
        let custom = config
            .into_registry(true)
            .with_context(|| format!("Namespace table {} conflicts", path.display()))?;
        registry::install(custom)?;
    }
    Ok(registry::global())
}
