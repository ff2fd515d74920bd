//! Namespace registry validator.
//!
//! Checks the invariants every registry must hold, whoever populated it:
//! - id 0 is the empty namespace
//! - the reserved id is never assigned
//! - ids, URIs and non-empty prefixes are each bound once
//! - every other URI is non-blank and free of whitespace

use std::collections::HashMap;

use oxml_schema::{NamespaceId, NamespaceRegistry};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "registry";

/// Validates `registry`.
pub fn validate(registry: &NamespaceRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_empty_namespace(registry, &mut report);
    check_reserved_id(registry, &mut report);
    check_bijections(registry, &mut report);
    check_uri_shape(registry, &mut report);

    report
}

fn check_empty_namespace(registry: &NamespaceRegistry, report: &mut ConformanceReport) {
    match registry.entry(NamespaceId::EMPTY) {
        Some(ns) if ns.is_empty_namespace() => report.push(TestResult::pass(
            VALIDATOR,
            "Id 0 is the empty namespace",
        )),
        Some(ns) => report.push(TestResult::fail(
            VALIDATOR,
            format!("Id 0 is bound to {:?} instead of the empty namespace", ns.uri),
        )),
        None => report.push(TestResult::fail(VALIDATOR, "Id 0 is not registered")),
    }
}

fn check_reserved_id(registry: &NamespaceRegistry, report: &mut ConformanceReport) {
    if registry.contains(NamespaceId::RESERVED) {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Reserved id {} is assigned", NamespaceId::RESERVED),
        ));
    } else {
        report.push(TestResult::pass(VALIDATOR, "Reserved id is unassigned"));
    }
}

fn check_bijections(registry: &NamespaceRegistry, report: &mut ConformanceReport) {
    let mut ids: HashMap<NamespaceId, usize> = HashMap::new();
    let mut uris: HashMap<&str, Vec<NamespaceId>> = HashMap::new();
    let mut prefixes: HashMap<&str, Vec<NamespaceId>> = HashMap::new();
    for ns in registry.iter() {
        *ids.entry(ns.id).or_default() += 1;
        uris.entry(ns.uri.as_ref()).or_default().push(ns.id);
        if !ns.prefix.is_empty() {
            prefixes.entry(ns.prefix.as_ref()).or_default().push(ns.id);
        }
    }

    let mut dup_ids: Vec<String> = ids
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(id, n)| format!("id {id} appears {n} times"))
        .collect();
    dup_ids.sort();
    report.push(TestResult::check(
        VALIDATOR,
        format!("{} namespace ids are unique", registry.len()),
        "Namespace ids are bound more than once",
        dup_ids,
    ));

    report.push(TestResult::check(
        VALIDATOR,
        "Each URI maps to exactly one id",
        "URIs are bound to more than one id",
        shared(&uris),
    ));

    report.push(TestResult::check(
        VALIDATOR,
        "Each prefix maps to exactly one id",
        "Prefixes are bound to more than one id",
        shared(&prefixes),
    ));
}

fn shared(index: &HashMap<&str, Vec<NamespaceId>>) -> Vec<String> {
    let mut out: Vec<String> = index
        .iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(key, ids)| {
            let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
            format!("{key:?} -> ids {}", ids.join(", "))
        })
        .collect();
    out.sort();
    out
}

fn check_uri_shape(registry: &NamespaceRegistry, report: &mut ConformanceReport) {
    let malformed: Vec<String> = registry
        .iter()
        .filter(|ns| ns.id != NamespaceId::EMPTY)
        .filter(|ns| ns.is_empty_namespace() || ns.uri.chars().any(char::is_whitespace))
        .map(|ns| format!("id {}: {:?}", ns.id, ns.uri))
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        "All namespace URIs are well formed",
        "Malformed namespace URIs",
        malformed,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_conforms() -> oxml_schema::Result<()> {
        let report = validate(&oxml_schema::namespaces::builtin()?);
        assert!(report.all_passed(), "{:#?}", report.results);
        Ok(())
    }

    #[test]
    fn empty_namespace_is_reported_at_id_zero() -> oxml_schema::Result<()> {
        let mut builder = NamespaceRegistry::builder();
        builder.register(NamespaceId::new(4), "ex", "urn:example")?;
        let report = validate(&builder.build());
        assert!(report.all_passed(), "{:#?}", report.results);
        assert!(report
            .results
            .iter()
            .any(|r| r.message == "Id 0 is the empty namespace"));
        Ok(())
    }

    #[test]
    fn whitespace_uri_fails() -> oxml_schema::Result<()> {
        let mut builder = NamespaceRegistry::builder();
        builder.register(NamespaceId::new(4), "bad", "urn:has space")?;
        let report = validate(&builder.build());
        assert_eq!(report.failure_count(), 1);
        Ok(())
    }
}
