//! Attribute metadata for markup document models.
//!
//! The `oxml-schema` crate describes how a field of an in-memory document
//! model maps to a markup attribute: the attribute's namespace, its local tag
//! name and its position among sibling attributes. Namespaces are stored as
//! one-byte [`NamespaceId`]s and resolved through a [`NamespaceRegistry`].
//!
//! # Entry Point
//!
//! ```
//! use oxml_schema::{namespaces, AttributeDescriptor, AttributeTable};
//!
//! let color = AttributeTable::new("w:color")
//!     .declare("val", AttributeDescriptor::with_index(namespaces::W, "val", 0)?)
//!     .declare("theme_color", AttributeDescriptor::new(namespaces::W, "themeColor")?);
//!
//! let val = color.get("val").map(|d| d.namespace_uri());
//! assert_eq!(val, Some("http://schemas.openxmlformats.org/wordprocessingml/2006/main"));
//! # Ok::<(), oxml_schema::SchemaError>(())
//! ```
//!
//! # Registry
//!
//! The process-wide registry is read through [`registry::global`]. It holds
//! the built-in table unless a custom one is put in place with
//! [`registry::install`] before the first lookup:
//!
//! ```no_run
//! let table = oxml_schema::RegistryConfig::load("namespaces.toml".as_ref())?;
//! oxml_schema::registry::install(table.into_registry(true)?)?;
//! # Ok::<(), oxml_schema::SchemaError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod namespaces;
pub mod registry;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod table;

pub use config::{NamespaceEntry, RegistryConfig};
pub use descriptor::AttributeDescriptor;
pub use error::{Result, SchemaError};
pub use model::{Namespace, NamespaceId};
pub use registry::{NamespaceRegistry, NamespaceResolver, RegistryBuilder};
pub use table::{AttributeEntry, AttributeTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_namespace_count() -> Result<()> {
        // 26 named namespaces plus the empty namespace at id 0.
        assert_eq!(namespaces::builtin()?.len(), 27);
        Ok(())
    }

    #[test]
    fn catalog_ids_resolve_in_builtin_registry() -> Result<()> {
        let registry = namespaces::builtin()?;
        for table in catalog::all()? {
            for entry in &table {
                assert!(
                    registry.contains(entry.descriptor.namespace_id()),
                    "Unresolved namespace in {}: {}",
                    table.element(),
                    entry.descriptor
                );
            }
        }
        Ok(())
    }

    #[test]
    fn descriptors_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AttributeDescriptor>();
        assert_send_sync::<AttributeTable>();
        assert_send_sync::<NamespaceRegistry>();
    }
}
