//! Conformance suite for namespace registries and attribute tables.
//!
//! Generated attribute tables store raw namespace ids and are never checked
//! against the registry at construction time. This suite is where that
//! check happens, together with the registry invariants and the freshness
//! of the built JSON artifacts.
//!
//! # Conformance Scope
//!
//! | Component | Checks |
//! |-----------|--------|
//! | Registry | id 0 is `""`, reserved id unassigned, id/URI/prefix bijections |
//! | Attribute tables | ids resolve, tags are NCNames, duplicates (warning) |
//! | Artifacts | `namespaces.json` and `attributes.json` match the live data |
//!
//! # Entry Point
//!
//! ```no_run
//! use oxml_conformance::{run_all, ConformancePaths};
//! use std::path::PathBuf;
//!
//! let paths = ConformancePaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let registry = oxml_schema::registry::global();
//! let tables = oxml_schema::catalog::all()?;
//! let report = run_all(&paths, registry, &tables)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use oxml_schema::{AttributeTable, NamespaceRegistry};

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
pub struct ConformancePaths {
    /// Directory containing built artifacts (`namespaces.json`, `attributes.json`).
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Registry invariants
/// 2. Attribute tables against the registry
/// 3. Built artifacts against both
///
/// # Errors
///
/// Returns an error only if an artifact cannot be read or parsed.
pub fn run_all(
    paths: &ConformancePaths,
    registry: &NamespaceRegistry,
    tables: &[AttributeTable],
) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::registry::validate(registry));
    report.extend(validators::tables::validate(registry, tables)?);
    report.extend(validators::artifact::validate(&paths.artifacts, registry, tables)?);

    tracing::debug!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    #[test]
    fn missing_artifacts_are_the_only_failures() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let paths = ConformancePaths {
            artifacts: dir.path().to_path_buf(),
        };
        let registry = oxml_schema::namespaces::builtin()?;
        let tables = oxml_schema::catalog::all()?;
        let report = run_all(&paths, &registry, &tables)?;
        // Only the two missing-artifact checks fail.
        assert_eq!(report.failure_count(), 2);
        assert!(report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .all(|r| r.validator == "artifact"));
        Ok(())
    }
}
