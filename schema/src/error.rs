//! Error type shared by the registry, descriptors and configuration loading.

use std::path::PathBuf;

use crate::model::NamespaceId;

/// Errors raised while building namespace registries or attribute descriptors.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A required argument was empty.
    #[error("invalid argument: `{param}` must be non-empty")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
    },

    /// The namespace URI is not present in the registry.
    #[error("namespace not found: {uri:?}")]
    NamespaceNotFound {
        /// The URI that failed to resolve.
        uri: String,
    },

    /// The id is the reserved "no namespace id" sentinel.
    #[error("namespace id {id} is reserved")]
    ReservedNamespaceId {
        /// The rejected id.
        id: NamespaceId,
    },

    /// The id is already bound to another URI.
    #[error("namespace id {id} is already registered for {existing:?}")]
    DuplicateNamespaceId {
        /// The rejected id.
        id: NamespaceId,
        /// The URI already bound to `id`.
        existing: String,
    },

    /// The URI is already bound to another id.
    #[error("namespace {uri:?} is already registered as id {existing}")]
    DuplicateNamespaceUri {
        /// The rejected URI.
        uri: String,
        /// The id already bound to `uri`.
        existing: NamespaceId,
    },

    /// The prefix is already bound to another id.
    #[error("prefix {prefix:?} is already registered as id {existing}")]
    DuplicatePrefix {
        /// The rejected prefix.
        prefix: String,
        /// The id already bound to `prefix`.
        existing: NamespaceId,
    },

    /// The process-wide registry was already initialised.
    #[error("the global namespace registry is already initialized")]
    RegistryAlreadyInitialized,

    /// A namespace table file could not be parsed.
    #[error("invalid namespace table: {0}")]
    Config(#[from] toml::de::Error),

    /// A namespace table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for results carrying a [`SchemaError`].
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
