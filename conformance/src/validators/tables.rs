//! Attribute table validator.
//!
//! - every descriptor's namespace id resolves in the registry
//! - every tag is an XML NCName
//! - a `(namespace, tag)` pair declared by two fields of one table is
//!   reported as a warning; it is legal but usually a copy-paste slip
//! - two fields sharing an explicit index are reported as a warning

use std::collections::HashMap;

use anyhow::{Context, Result};
use oxml_schema::{AttributeTable, NamespaceId, NamespaceRegistry};
use regex::Regex;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "tables";

/// ASCII subset of the XML `NCName` production.
const NCNAME: &str = r"^[A-Za-z_][A-Za-z0-9._\-]*$";

/// Validates `tables` against `registry`.
///
/// # Errors
///
/// Returns an error only if the tag pattern fails to compile.
pub fn validate(registry: &NamespaceRegistry, tables: &[AttributeTable]) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let ncname = Regex::new(NCNAME).context("Failed to compile NCName pattern")?;

    let mut unresolved = Vec::new();
    let mut bad_tags = Vec::new();
    let mut duplicates = Vec::new();
    let mut index_ties = Vec::new();

    for table in tables {
        let mut seen: HashMap<(NamespaceId, &str), &str> = HashMap::new();
        let mut explicit: HashMap<u8, &str> = HashMap::new();

        for entry in table {
            let d = &entry.descriptor;
            if !registry.contains(d.namespace_id()) {
                unresolved.push(format!(
                    "{}.{}: namespace id {}",
                    table.element(),
                    entry.field,
                    d.namespace_id()
                ));
            }
            if !ncname.is_match(d.tag()) {
                bad_tags.push(format!("{}.{}: {:?}", table.element(), entry.field, d.tag()));
            }
            if let Some(first) = seen.insert((d.namespace_id(), d.tag()), entry.field.as_ref()) {
                duplicates.push(format!(
                    "{}: {} and {} both map to {}",
                    table.element(),
                    first,
                    entry.field,
                    d
                ));
            }
            if let Some(index) = d.order() {
                if let Some(first) = explicit.insert(index, entry.field.as_ref()) {
                    index_ties.push(format!(
                        "{}: {} and {} share index {}",
                        table.element(),
                        first,
                        entry.field,
                        index
                    ));
                }
            }
        }
    }

    let attribute_count: usize = tables.iter().map(AttributeTable::len).sum();
    report.push(TestResult::check(
        VALIDATOR,
        format!("{attribute_count} attributes across {} tables resolve their namespace", tables.len()),
        "Attributes reference unregistered namespace ids",
        unresolved,
    ));
    report.push(TestResult::check(
        VALIDATOR,
        "All tags are valid NCNames",
        "Tags that are not valid NCNames",
        bad_tags,
    ));
    if duplicates.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "No attribute is declared twice in a table"));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            "Attributes declared by more than one field",
            duplicates,
        ));
    }
    if index_ties.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "Explicit indexes are distinct within each table"));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            "Fields sharing an explicit index",
            index_ties,
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxml_schema::{catalog, namespaces, AttributeDescriptor};

    #[test]
    fn builtin_catalog_conforms() -> anyhow::Result<()> {
        let report = validate(&namespaces::builtin()?, &catalog::all()?)?;
        assert!(report.all_passed(), "{:#?}", report.results);
        assert_eq!(report.warning_count(), 0);
        Ok(())
    }

    #[test]
    fn unresolved_and_malformed_fail() -> anyhow::Result<()> {
        let table = AttributeTable::new("x:broken")
            .declare("orphan", AttributeDescriptor::new(NamespaceId::new(200), "orphan")?)
            .declare("spaced", AttributeDescriptor::new(namespaces::W, "has space")?);
        let report = validate(&namespaces::builtin()?, &[table])?;
        assert_eq!(report.failure_count(), 2);
        Ok(())
    }

    #[test]
    fn duplicate_attribute_only_warns() -> anyhow::Result<()> {
        let table = AttributeTable::new("w:twice")
            .declare("a", AttributeDescriptor::with_index(namespaces::W, "val", 0)?)
            .declare("b", AttributeDescriptor::with_index(namespaces::W, "val", 0)?);
        let report = validate(&namespaces::builtin()?, &[table])?;
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 2);
        Ok(())
    }
}
