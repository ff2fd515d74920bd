//! `oxml-build`: Writes the namespace registry and the attribute catalog as
//! JSON artifacts.
//!
//! **Outputs:**
//! - `<out>/namespaces.json`: every registry entry, in id order
//! - `<out>/attributes.json`: every built-in attribute table
//!
//! **Usage:**
//! ```
//! oxml-build [--out <path>] [--namespaces <table.toml>] [-v]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use oxml_conformance::validators::artifact::{ATTRIBUTES_FILE, NAMESPACES_FILE};
use oxml_schema::serializer::json;
use oxml_schema::{catalog, registry, NamespaceRegistry, RegistryConfig};
use tracing::Level;

/// Build the oxml-schema JSON artifacts.
#[derive(Parser)]
#[command(name = "oxml-build", about = "Build namespace and attribute artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Extra namespaces (TOML) registered on top of the built-in table.
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
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    println!(
        "oxml-schema: {} namespaces, {} attribute tables, {} attributes",
        registry.len(),
        tables.len(),
        tables.iter().map(|t| t.len()).sum::<usize>()
    );

    write_json(&out.join(NAMESPACES_FILE), &json::registry_to_json(registry))?;
    write_json(&out.join(ATTRIBUTES_FILE), &json::catalog_to_json(&tables, registry))?;

    println!("Build complete.");
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

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  Written: {}", path.display());
    Ok(())
}
