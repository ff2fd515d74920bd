//! Prints the built-in namespace table and the attribute catalog.
//!
//! Run with: `cargo run --example dump_registry -p oxml-schema`

use oxml_schema::{catalog, registry, serializer::json};

fn main() -> oxml_schema::Result<()> {
    let registry = registry::global();

    println!("Namespace registry: {} entries", registry.len());
    for ns in registry.iter() {
        println!("  {:>3}  {:8} {}", ns.id, ns.prefix, ns.uri);
    }
    println!();

    let tables = catalog::all()?;
    for table in &tables {
        let names: Vec<String> = table
            .serialization_order()
            .into_iter()
            .map(|e| e.descriptor.qualified_name(registry))
            .collect();
        println!("  {:16} {}", table.element(), names.join(" "));
    }
    println!();

    let value = json::catalog_to_json(&tables, registry);
    let text = serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON ({} bytes)", text.len());
    Ok(())
}
