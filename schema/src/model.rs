//! Core value types shared by the registry and the descriptors.
//!
//! Namespaces are identified by a one-byte [`NamespaceId`]; the registry maps
//! each id to its canonical URI and prefix. The well-known URIs are collected
//! in [`uris`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Compact identifier of a markup namespace.
///
/// - `0` is the empty namespace (`""`), used by unqualified attributes.
/// - `255` ([`NamespaceId::RESERVED`]) is a sentinel and is never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(u8);

impl NamespaceId {
    /// The empty ("no namespace") id.
    pub const EMPTY: NamespaceId = NamespaceId(0);

    /// The sentinel id. Registries refuse to assign it.
    pub const RESERVED: NamespaceId = NamespaceId(u8::MAX);

    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true for the sentinel id.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 == u8::MAX
    }
}

impl From<u8> for NamespaceId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<NamespaceId> for u8 {
    fn from(id: NamespaceId) -> Self {
        id.0
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One registry entry: an id bound to a prefix and a canonical URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// The compact id.
    pub id: NamespaceId,
    /// Conventional prefix (e.g. `"w"`). Empty for the empty namespace.
    pub prefix: Cow<'static, str>,
    /// Canonical namespace URI.
    pub uri: Cow<'static, str>,
}

impl Namespace {
    /// Creates an entry.
    pub fn new(
        id: NamespaceId,
        prefix: impl Into<Cow<'static, str>>,
        uri: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id,
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    /// Returns true for the empty namespace entry.
    #[must_use]
    pub fn is_empty_namespace(&self) -> bool {
        self.uri.is_empty()
    }
}

/// Canonical namespace URIs used by the built-in table.
pub mod uris {
    /// The empty namespace.
    pub const EMPTY: &str = "";
    /// `xmlns` namespace-declaration namespace.
    pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";
    /// `xml` namespace.
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    /// Office document relationships.
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Markup compatibility.
    pub const MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
    /// DrawingML main.
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    /// DrawingML charts.
    pub const C: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
    /// DrawingML pictures.
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
    /// WordprocessingML drawing placement.
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    /// WordprocessingML main.
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// SpreadsheetML main.
    pub const X: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    /// PresentationML main.
    pub const P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
    /// Office math.
    pub const M: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
    /// VML.
    pub const V: &str = "urn:schemas-microsoft-com:vml";
    /// Office VML extensions.
    pub const O: &str = "urn:schemas-microsoft-com:office:office";
    /// Word VML extensions.
    pub const W10: &str = "urn:schemas-microsoft-com:office:word";
    /// Core document properties.
    pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    /// Dublin Core elements.
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// Dublin Core terms.
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    /// XML Schema instance.
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
    /// Extended document properties.
    pub const AP: &str = "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
    /// Document property variant types.
    pub const VT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";
    /// Word 2010 extensions.
    pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
    /// Word 2012 extensions.
    pub const W15: &str = "http://schemas.microsoft.com/office/word/2012/wordml";
    /// Drawing 2010 extensions.
    pub const A14: &str = "http://schemas.microsoft.com/office/drawing/2010/main";
    /// Spreadsheet 2009 extensions.
    pub const X14: &str = "http://schemas.microsoft.com/office/spreadsheetml/2009/9/main";
    /// PowerPoint 2010 extensions.
    pub const P14: &str = "http://schemas.microsoft.com/office/powerpoint/2010/main";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_id_is_max() {
        assert!(NamespaceId::RESERVED.is_reserved());
        assert_eq!(NamespaceId::RESERVED.get(), 255);
        assert!(!NamespaceId::EMPTY.is_reserved());
    }

    #[test]
    fn only_the_blank_uri_is_the_empty_namespace() {
        assert!(Namespace::new(NamespaceId::EMPTY, "", "").is_empty_namespace());
        assert!(!Namespace::new(NamespaceId::new(3), "r", "urn:r").is_empty_namespace());
    }

    #[test]
    fn id_displays_as_number() {
        assert_eq!(NamespaceId::new(23).to_string(), "23");
    }
}
