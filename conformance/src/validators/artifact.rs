//! Built artifact validator.
//!
//! Verifies that the JSON written by `oxml-build` agrees with the live data:
//! - `namespaces.json` lists exactly the registry entries, in id order
//! - `attributes.json` lists exactly the live attribute tables, attribute
//!   for attribute

use std::path::Path;

use anyhow::{Context, Result};
use oxml_schema::serializer::json;
use oxml_schema::{AttributeTable, NamespaceRegistry};
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifact";

/// File name of the namespace table artifact.
pub const NAMESPACES_FILE: &str = "namespaces.json";

/// File name of the attribute catalog artifact.
pub const ATTRIBUTES_FILE: &str = "attributes.json";

/// Validates the artifacts in `artifacts` against `registry` and `tables`.
///
/// # Errors
///
/// Returns an error if an artifact exists but cannot be read or parsed.
pub fn validate(
    artifacts: &Path,
    registry: &NamespaceRegistry,
    tables: &[AttributeTable],
) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if let Some(value) = read_json(artifacts, NAMESPACES_FILE, &mut report)? {
        check_namespaces(&value, registry, &mut report);
    }
    if let Some(value) = read_json(artifacts, ATTRIBUTES_FILE, &mut report)? {
        check_attributes(&value, registry, tables, &mut report);
    }

    Ok(report)
}

/// Reads `name`; a missing file is a failure result rather than an error.
fn read_json(dir: &Path, name: &str, report: &mut ConformanceReport) -> Result<Option<Value>> {
    let path = dir.join(name);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} not found in artifacts directory"),
        ));
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    Ok(Some(value))
}

fn check_namespaces(value: &Value, registry: &NamespaceRegistry, report: &mut ConformanceReport) {
    let expected = json::registry_to_json(registry);
    let (Some(actual), Some(expected)) = (
        value["namespaces"].as_array(),
        expected["namespaces"].as_array(),
    ) else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{NAMESPACES_FILE} has no `namespaces` array"),
        ));
        return;
    };

    let mut mismatches: Vec<String> = actual
        .iter()
        .zip(expected)
        .filter(|(a, e)| a != e)
        .map(|(a, e)| format!("artifact {a} != registry {e}"))
        .collect();
    if actual.len() != expected.len() {
        mismatches.push(format!(
            "artifact lists {} namespaces, registry has {}",
            actual.len(),
            expected.len()
        ));
    }
    report.push(TestResult::check(
        VALIDATOR,
        format!("{NAMESPACES_FILE} matches the registry ({} entries)", expected.len()),
        format!("{NAMESPACES_FILE} is out of date"),
        mismatches,
    ));
}

fn check_attributes(
    value: &Value,
    registry: &NamespaceRegistry,
    tables: &[AttributeTable],
    report: &mut ConformanceReport,
) {
    let expected = json::catalog_to_json(tables, registry);
    let (Some(actual), Some(expected)) = (
        value["elements"].as_array(),
        expected["elements"].as_array(),
    ) else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{ATTRIBUTES_FILE} has no `elements` array"),
        ));
        return;
    };

    let mut mismatches = Vec::new();
    for live in expected {
        let element = &live["element"];
        match actual.iter().find(|e| e["element"] == *element) {
            None => mismatches.push(format!("missing element {element}")),
            Some(built) if built != live => {
                mismatches.push(format!("element {element} differs: artifact {built} != live {live}"));
            }
            Some(_) => {}
        }
    }
    for built in actual {
        let element = &built["element"];
        if !expected.iter().any(|e| e["element"] == *element) {
            mismatches.push(format!("unexpected element {element}"));
        }
    }

    report.push(TestResult::check(
        VALIDATOR,
        format!("{ATTRIBUTES_FILE} matches all {} tables", tables.len()),
        format!("{ATTRIBUTES_FILE} is out of date"),
        mismatches,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxml_schema::{catalog, namespaces};

    fn write(dir: &Path, name: &str, value: &Value) -> Result<()> {
        std::fs::write(dir.join(name), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    #[test]
    fn fresh_artifacts_pass() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = namespaces::builtin()?;
        let tables = catalog::all()?;
        write(dir.path(), NAMESPACES_FILE, &json::registry_to_json(&registry))?;
        write(dir.path(), ATTRIBUTES_FILE, &json::catalog_to_json(&tables, &registry))?;

        let report = validate(dir.path(), &registry, &tables)?;
        assert!(report.all_passed(), "{:#?}", report.results);
        Ok(())
    }

    #[test]
    fn missing_artifacts_fail() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let report = validate(dir.path(), &namespaces::builtin()?, &[])?;
        assert_eq!(report.failure_count(), 2);
        Ok(())
    }

    #[test]
    fn stale_namespace_table_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let stale = oxml_schema::NamespaceRegistry::builder().build();
        write(dir.path(), NAMESPACES_FILE, &json::registry_to_json(&stale))?;
        write(dir.path(), ATTRIBUTES_FILE, &serde_json::json!({ "elements": [] }))?;

        let report = validate(dir.path(), &namespaces::builtin()?, &[])?;
        assert_eq!(report.failure_count(), 1);
        Ok(())
    }

    #[test]
    fn stale_attribute_catalog_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = namespaces::builtin()?;
        let tables = catalog::all()?;
        write(dir.path(), NAMESPACES_FILE, &json::registry_to_json(&registry))?;

        let mut stale = json::catalog_to_json(&tables, &registry);
        if let Some(elements) = stale["elements"].as_array_mut() {
            for element in elements {
                element["attributes"] = serde_json::json!([]);
            }
        }
        write(dir.path(), ATTRIBUTES_FILE, &stale)?;

        let report = validate(dir.path(), &registry, &tables)?;
        assert_eq!(report.failure_count(), 1);
        let failure = report.results.iter().find(|r| r.is_failure());
        assert!(failure.is_some_and(|r| r.details.iter().all(|d| d.contains("differs"))));
        Ok(())
    }

    #[test]
    fn extra_attribute_element_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = namespaces::builtin()?;
        write(dir.path(), NAMESPACES_FILE, &json::registry_to_json(&registry))?;
        write(
            dir.path(),
            ATTRIBUTES_FILE,
            &serde_json::json!({ "elements": [ { "element": "w:gone", "attributes": [] } ] }),
        )?;

        let report = validate(dir.path(), &registry, &[])?;
        assert_eq!(report.failure_count(), 1);
        Ok(())
    }

    #[test]
    fn unparsable_artifact_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(NAMESPACES_FILE), "{ not json")?;
        assert!(validate(dir.path(), &namespaces::builtin()?, &[]).is_err());
        Ok(())
    }
}
