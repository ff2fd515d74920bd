//! Namespace table files.
//!
//! A table file lists extra namespaces in TOML:
//!
//! ```toml
//! [[namespace]]
//! id = 200
//! prefix = "ex"
//! uri = "http://example.com/ns"
//! ```
//!
//! The entries are registered on top of the built-in table, or on their own
//! when `include_builtin` is false.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SchemaError};
use crate::model::NamespaceId;
use crate::namespaces;
use crate::registry::NamespaceRegistry;

/// One `[[namespace]]` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceEntry {
    /// Compact id; must be free and not 255.
    pub id: NamespaceId,
    /// Conventional prefix; may be omitted.
    #[serde(default)]
    pub prefix: String,
    /// Canonical URI.
    pub uri: String,
}

/// Parsed namespace table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Rows in file order.
    #[serde(default, rename = "namespace")]
    pub namespaces: Vec<NamespaceEntry>,
}

impl RegistryConfig {
    /// Parses a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Config`] if the text is not a valid table.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a table file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] if the file cannot be read and
    /// [`SchemaError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            namespaces = config.namespaces.len(),
            "loaded namespace table"
        );
        Ok(config)
    }

    /// Builds a registry from the rows, optionally on top of the built-in
    /// table.
    ///
    /// # Errors
    ///
    /// Returns the registry's validation error for the first row that
    /// conflicts with the built-in table or an earlier row.
    pub fn into_registry(self, include_builtin: bool) -> Result<NamespaceRegistry> {
        let mut builder = if include_builtin {
            namespaces::builtin_builder()?
        } else {
            NamespaceRegistry::builder()
        };
        for entry in self.namespaces {
            builder.register(entry.id, entry.prefix, entry.uri)?;
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        [[namespace]]
        id = 200
        prefix = "ex"
        uri = "http://example.com/ns"

        [[namespace]]
        id = 201
        uri = "urn:no-prefix"
    "#;

    #[test]
    fn parses_rows() -> Result<()> {
        let config = RegistryConfig::from_toml_str(TABLE)?;
        assert_eq!(config.namespaces.len(), 2);
        assert_eq!(config.namespaces[0].id, NamespaceId::new(200));
        assert_eq!(config.namespaces[1].prefix, "");
        Ok(())
    }

    #[test]
    fn merges_over_builtin() -> Result<()> {
        let registry = RegistryConfig::from_toml_str(TABLE)?.into_registry(true)?;
        assert_eq!(registry.len(), namespaces::BUILTIN.len() + 3);
        assert_eq!(
            registry.get_namespace_id("http://example.com/ns")?,
            NamespaceId::new(200)
        );
        assert!(registry.contains(namespaces::W));
        Ok(())
    }

    #[test]
    fn standalone_table() -> Result<()> {
        let registry = RegistryConfig::from_toml_str(TABLE)?.into_registry(false)?;
        assert_eq!(registry.len(), 3);
        assert!(!registry.contains(namespaces::W));
        Ok(())
    }

    #[test]
    fn builtin_id_collision_is_rejected() -> Result<()> {
        let config = RegistryConfig::from_toml_str(
            "[[namespace]]\nid = 9\nprefix = \"dup\"\nuri = \"urn:dup\"\n",
        )?;
        assert!(matches!(
            config.into_registry(true),
            Err(SchemaError::DuplicateNamespaceId { .. })
        ));
        Ok(())
    }

    #[test]
    fn malformed_table_is_a_config_error() {
        let err = RegistryConfig::from_toml_str("[[namespace]]\nid = \"three\"\n");
        assert!(matches!(err, Err(SchemaError::Config(_))));
        let err = RegistryConfig::from_toml_str("[[namespace]]\nid = 300\nuri = \"urn:x\"\n");
        assert!(matches!(err, Err(SchemaError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RegistryConfig::load(Path::new("/nonexistent/namespaces.toml"));
        assert!(matches!(err, Err(SchemaError::Io { .. })));
    }
}
