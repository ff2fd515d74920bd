//! Namespace registry: the bijection between compact namespace ids and
//! canonical namespace URIs.
//!
//! A registry is assembled once through [`RegistryBuilder`] and is immutable
//! afterwards. The process-wide instance consulted by
//! [`AttributeDescriptor`](crate::AttributeDescriptor) lives behind
//! [`global`]; a custom table may be put there with [`install`] before the
//! first lookup, otherwise the built-in table is used.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Result, SchemaError};
use crate::model::{Namespace, NamespaceId};
use crate::namespaces;

/// The two lookups an attribute descriptor needs from a namespace table.
pub trait NamespaceResolver {
    /// Resolves a namespace URI to its id.
    fn resolve_id(&self, uri: &str) -> Option<NamespaceId>;

    /// Resolves an id to its canonical namespace URI.
    fn resolve_uri(&self, id: NamespaceId) -> Option<&str>;

    /// Resolves an id to its conventional prefix, when one is known.
    fn resolve_prefix(&self, _id: NamespaceId) -> Option<&str> {
        None
    }
}

const SLOTS: usize = u8::MAX as usize + 1;

/// Immutable id ↔ URI table.
#[derive(Debug, Clone)]
pub struct NamespaceRegistry {
    /// Entries in ascending id order.
    entries: Vec<Namespace>,
    /// Id → position in `entries`.
    slots: [Option<usize>; SLOTS],
    by_uri: HashMap<Cow<'static, str>, NamespaceId>,
    by_prefix: HashMap<Cow<'static, str>, NamespaceId>,
}

impl NamespaceRegistry {
    /// Starts a new table containing only the empty namespace at id 0.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up the id of `uri`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NamespaceNotFound`] if `uri` is not registered.
    pub fn get_namespace_id(&self, uri: &str) -> Result<NamespaceId> {
        self.try_get_namespace_id(uri)
            .ok_or_else(|| SchemaError::NamespaceNotFound {
                uri: uri.to_owned(),
            })
    }

    /// Looks up the id of `uri`, returning `None` if it is not registered.
    #[must_use]
    pub fn try_get_namespace_id(&self, uri: &str) -> Option<NamespaceId> {
        self.by_uri.get(uri).copied()
    }

    /// Looks up the canonical URI of `id`.
    ///
    /// Every id carried by a descriptor is expected to resolve; `None` here
    /// means the descriptor table and the registry disagree.
    #[must_use]
    pub fn get_namespace_uri(&self, id: NamespaceId) -> Option<&str> {
        self.entry(id).map(|ns| ns.uri.as_ref())
    }

    /// Looks up the conventional prefix of `id`.
    #[must_use]
    pub fn get_prefix(&self, id: NamespaceId) -> Option<&str> {
        self.entry(id).map(|ns| ns.prefix.as_ref())
    }

    /// Looks up the id bound to `prefix`.
    #[must_use]
    pub fn get_namespace_id_by_prefix(&self, prefix: &str) -> Option<NamespaceId> {
        self.by_prefix.get(prefix).copied()
    }

    /// Looks up the URI bound to `prefix`.
    #[must_use]
    pub fn get_namespace_uri_by_prefix(&self, prefix: &str) -> Option<&str> {
        self.get_namespace_id_by_prefix(prefix)
            .and_then(|id| self.get_namespace_uri(id))
    }

    /// Returns the full entry for `id`.
    #[must_use]
    pub fn entry(&self, id: NamespaceId) -> Option<&Namespace> {
        self.slots[usize::from(id.get())].map(|pos| &self.entries[pos])
    }

    /// Returns true if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: NamespaceId) -> bool {
        self.slots[usize::from(id.get())].is_some()
    }

    /// Iterates over all entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.entries.iter()
    }

    /// Number of registered namespaces, the empty namespace included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: every registry holds the empty namespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NamespaceResolver for NamespaceRegistry {
    fn resolve_id(&self, uri: &str) -> Option<NamespaceId> {
        self.try_get_namespace_id(uri)
    }

    fn resolve_uri(&self, id: NamespaceId) -> Option<&str> {
        self.get_namespace_uri(id)
    }

    fn resolve_prefix(&self, id: NamespaceId) -> Option<&str> {
        self.get_prefix(id)
    }
}

/// Accumulates entries and enforces the registry invariants as they arrive.
///
/// - the reserved id is never assigned
/// - an id maps to exactly one URI and a URI to exactly one id
/// - a non-empty prefix maps to exactly one id
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    entries: Vec<Namespace>,
}

impl RegistryBuilder {
    fn new() -> Self {
        Self {
            entries: vec![Namespace::new(NamespaceId::EMPTY, "", "")],
        }
    }

    /// Adds `(id, prefix, uri)` to the table.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ReservedNamespaceId`] for the sentinel id, and
    /// one of the `Duplicate*` variants if the id, URI or non-empty prefix is
    /// already bound.
    pub fn register(
        &mut self,
        id: NamespaceId,
        prefix: impl Into<Cow<'static, str>>,
        uri: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self> {
        let prefix = prefix.into();
        let uri = uri.into();

        if id.is_reserved() {
            return Err(SchemaError::ReservedNamespaceId { id });
        }
        for ns in &self.entries {
            if ns.id == id {
                return Err(SchemaError::DuplicateNamespaceId {
                    id,
                    existing: ns.uri.to_string(),
                });
            }
            if ns.uri == uri {
                return Err(SchemaError::DuplicateNamespaceUri {
                    uri: uri.into_owned(),
                    existing: ns.id,
                });
            }
            if !prefix.is_empty() && ns.prefix == prefix {
                return Err(SchemaError::DuplicatePrefix {
                    prefix: prefix.into_owned(),
                    existing: ns.id,
                });
            }
        }

        tracing::trace!(%id, %prefix, %uri, "registering namespace");
        self.entries.push(Namespace { id, prefix, uri });
        Ok(self)
    }

    /// Freezes the table.
    #[must_use]
    pub fn build(mut self) -> NamespaceRegistry {
        self.entries.sort_by_key(|ns| ns.id);

        let mut slots = [None; SLOTS];
        let mut by_uri = HashMap::with_capacity(self.entries.len());
        let mut by_prefix = HashMap::with_capacity(self.entries.len());
        for (pos, ns) in self.entries.iter().enumerate() {
            slots[usize::from(ns.id.get())] = Some(pos);
            by_uri.insert(ns.uri.clone(), ns.id);
            if !ns.prefix.is_empty() {
                by_prefix.insert(ns.prefix.clone(), ns.id);
            }
        }

        tracing::debug!(namespaces = self.entries.len(), "namespace registry built");
        NamespaceRegistry {
            entries: self.entries,
            slots,
            by_uri,
            by_prefix,
        }
    }
}

static GLOBAL: OnceLock<NamespaceRegistry> = OnceLock::new();

/// Installs `registry` as the process-wide table.
///
/// Must run before anything reads [`global`].
///
/// # Errors
///
/// Returns [`SchemaError::RegistryAlreadyInitialized`] if a table was already
/// installed or the built-in table was already loaded by a lookup.
pub fn install(registry: NamespaceRegistry) -> Result<()> {
    let count = registry.len();
    GLOBAL
        .set(registry)
        .map_err(|_| SchemaError::RegistryAlreadyInitialized)?;
    tracing::info!(namespaces = count, "installed global namespace registry");
    Ok(())
}

/// Returns the process-wide table, loading the built-in one on first use if
/// nothing was installed.
pub fn global() -> &'static NamespaceRegistry {
    GLOBAL.get_or_init(|| {
        namespaces::builtin().unwrap_or_else(|err| {
            tracing::error!(%err, "built-in namespace table is inconsistent");
            NamespaceRegistry::builder().build()
        })
    })
}
