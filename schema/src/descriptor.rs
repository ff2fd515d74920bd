//! Attribute descriptors: the `(namespace, tag, order)` triple attached to a
//! model field.
//!
//! A descriptor is an immutable value. It stores only the compact namespace
//! id; the URI is looked up in the registry on every read so callers always
//! observe the registry's canonical spelling.
//!
//! ```
//! use oxml_schema::{namespaces, AttributeDescriptor};
//!
//! let val = AttributeDescriptor::new(namespaces::W, "val")?;
//! assert_eq!(val.tag(), "val");
//! assert_eq!(val.index(), AttributeDescriptor::UNSPECIFIED_INDEX);
//! assert_eq!(
//!     val.namespace_uri(),
//!     "http://schemas.openxmlformats.org/wordprocessingml/2006/main"
//! );
//! # Ok::<(), oxml_schema::SchemaError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::{Result, SchemaError};
use crate::model::NamespaceId;
use crate::registry::{self, NamespaceResolver};

/// Namespace, tag name and ordering hint of one markup attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    namespace_id: NamespaceId,
    tag: Cow<'static, str>,
    index: u8,
}

impl AttributeDescriptor {
    /// Ordering index meaning "no explicit position".
    pub const UNSPECIFIED_INDEX: u8 = u8::MAX;

    /// Creates a descriptor for a known namespace id with no explicit order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidArgument`] if `tag` is empty.
    pub fn new(namespace_id: NamespaceId, tag: impl Into<Cow<'static, str>>) -> Result<Self> {
        Self::with_index(namespace_id, tag, Self::UNSPECIFIED_INDEX)
    }

    /// Creates a descriptor with an explicit ordering index.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidArgument`] if `tag` is empty.
    pub fn with_index(
        namespace_id: NamespaceId,
        tag: impl Into<Cow<'static, str>>,
        index: u8,
    ) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(SchemaError::InvalidArgument { param: "tag" });
        }
        Ok(Self {
            namespace_id,
            tag,
            index,
        })
    }

    /// Creates a descriptor from a literal namespace URI, resolved through the
    /// global registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NamespaceNotFound`] if `uri` is not registered,
    /// or [`SchemaError::InvalidArgument`] if `tag` is empty.
    pub fn from_uri(uri: &str, tag: impl Into<Cow<'static, str>>) -> Result<Self> {
        let namespace_id = registry::global().get_namespace_id(uri)?;
        Self::new(namespace_id, tag)
    }

    /// Same as [`from_uri`](Self::from_uri), against an explicit registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NamespaceNotFound`] if `uri` is not known to
    /// `resolver`, or [`SchemaError::InvalidArgument`] if `tag` is empty.
    pub fn from_uri_in<R>(resolver: &R, uri: &str, tag: impl Into<Cow<'static, str>>) -> Result<Self>
    where
        R: NamespaceResolver + ?Sized,
    {
        let namespace_id = resolver
            .resolve_id(uri)
            .ok_or_else(|| SchemaError::NamespaceNotFound {
                uri: uri.to_owned(),
            })?;
        Self::new(namespace_id, tag)
    }

    /// The local attribute name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The compact namespace id.
    #[must_use]
    pub fn namespace_id(&self) -> NamespaceId {
        self.namespace_id
    }

    /// The raw ordering index; [`UNSPECIFIED_INDEX`](Self::UNSPECIFIED_INDEX)
    /// when none was given.
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The ordering index, or `None` when unspecified.
    #[must_use]
    pub fn order(&self) -> Option<u8> {
        self.has_explicit_index().then_some(self.index)
    }

    /// Returns true if an explicit ordering index was given.
    #[must_use]
    pub fn has_explicit_index(&self) -> bool {
        self.index != Self::UNSPECIFIED_INDEX
    }

    /// The namespace URI, read from the global registry on every call.
    ///
    /// An id missing from the registry is logged and yields `""`, which is
    /// also the URI of the empty namespace. Use [`try_namespace_uri`] or
    /// [`NamespaceRegistry::contains`] to tell the two apart.
    ///
    /// [`try_namespace_uri`]: Self::try_namespace_uri
    /// [`NamespaceRegistry::contains`]: crate::NamespaceRegistry::contains
    #[must_use]
    pub fn namespace_uri(&self) -> &'static str {
        self.namespace_uri_in(registry::global()).unwrap_or_else(|| {
            tracing::warn!(
                namespace_id = %self.namespace_id,
                tag = %self.tag,
                "attribute namespace id is not registered"
            );
            ""
        })
    }

    /// The namespace URI from the global registry, or `None` if the id is
    /// not registered.
    #[must_use]
    pub fn try_namespace_uri(&self) -> Option<&'static str> {
        self.namespace_uri_in(registry::global())
    }

    /// The namespace URI according to `resolver`.
    #[must_use]
    pub fn namespace_uri_in<'r, R>(&self, resolver: &'r R) -> Option<&'r str>
    where
        R: NamespaceResolver + ?Sized,
    {
        resolver.resolve_uri(self.namespace_id)
    }

    /// `prefix:tag`, or the bare tag for the empty namespace or an id
    /// without a prefix.
    #[must_use]
    pub fn qualified_name<R>(&self, resolver: &R) -> String
    where
        R: NamespaceResolver + ?Sized,
    {
        match resolver.resolve_prefix(self.namespace_id) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", self.tag),
            _ => self.tag.to_string(),
        }
    }

    /// Returns true if both descriptors name the same attribute, whatever
    /// their ordering hints.
    #[must_use]
    pub fn same_attribute(&self, other: &Self) -> bool {
        self.namespace_id == other.namespace_id && self.tag == other.tag
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace_id, self.tag)
    }
}
