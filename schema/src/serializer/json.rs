//! JSON export of namespace registries and attribute tables.
//!
//! ```json
//! { "namespaces": [ { "id": 9, "prefix": "w", "uri": "http://..." } ] }
//! ```
//!
//! Attribute entries carry both the compact id and the resolved URI so the
//! artifact can be read without the registry.

use serde_json::{json, Value};

use crate::registry::{NamespaceRegistry, NamespaceResolver};
use crate::table::AttributeTable;

/// Serializes every registry entry, in id order.
#[must_use]
pub fn registry_to_json(registry: &NamespaceRegistry) -> Value {
    let namespaces: Vec<Value> = registry
        .iter()
        .map(|ns| {
            json!({
                "id": ns.id.get(),
                "prefix": ns.prefix,
                "uri": ns.uri
            })
        })
        .collect();
    json!({ "namespaces": namespaces })
}

/// Serializes one table. Entries are listed in serialization order; an
/// unspecified index is written as `null`, an unresolved namespace as
/// `null` too.
#[must_use]
pub fn table_to_json<R>(table: &AttributeTable, resolver: &R) -> Value
where
    R: NamespaceResolver + ?Sized,
{
    let attributes: Vec<Value> = table
        .serialization_order()
        .into_iter()
        .map(|entry| {
            let d = &entry.descriptor;
            json!({
                "field": entry.field,
                "namespaceId": d.namespace_id().get(),
                "namespaceUri": d.namespace_uri_in(resolver),
                "tag": d.tag(),
                "qualifiedName": d.qualified_name(resolver),
                "index": d.order()
            })
        })
        .collect();
    json!({
        "element": table.element(),
        "attributes": attributes
    })
}

/// Serializes a list of tables.
#[must_use]
pub fn catalog_to_json<R>(tables: &[AttributeTable], resolver: &R) -> Value
where
    R: NamespaceResolver + ?Sized,
{
    let elements: Vec<Value> = tables.iter().map(|t| table_to_json(t, resolver)).collect();
    json!({ "elements": elements })
}
