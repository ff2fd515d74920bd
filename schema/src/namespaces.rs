//! Built-in namespace table.
//!
//! Ids are fixed: generated attribute tables store them directly, so an id
//! must never be reused for a different URI.

use crate::model::{uris, NamespaceId};
use crate::registry::{NamespaceRegistry, RegistryBuilder};
use crate::Result;

/// `xmlns`.
pub const XMLNS: NamespaceId = NamespaceId::new(1);
/// `xml`.
pub const XML: NamespaceId = NamespaceId::new(2);
/// `r` (relationships).
pub const R: NamespaceId = NamespaceId::new(3);
/// `mc` (markup compatibility).
pub const MC: NamespaceId = NamespaceId::new(4);
/// `a` (DrawingML).
pub const A: NamespaceId = NamespaceId::new(5);
/// `c` (charts).
pub const C: NamespaceId = NamespaceId::new(6);
/// `pic` (pictures).
pub const PIC: NamespaceId = NamespaceId::new(7);
/// `wp` (drawing placement).
pub const WP: NamespaceId = NamespaceId::new(8);
/// `w` (WordprocessingML).
pub const W: NamespaceId = NamespaceId::new(9);
/// `x` (SpreadsheetML).
pub const X: NamespaceId = NamespaceId::new(10);
/// `p` (PresentationML).
pub const P: NamespaceId = NamespaceId::new(11);
/// `m` (math).
pub const M: NamespaceId = NamespaceId::new(12);
/// `v` (VML).
pub const V: NamespaceId = NamespaceId::new(13);
/// `o` (Office VML).
pub const O: NamespaceId = NamespaceId::new(14);
/// `w10` (Word VML).
pub const W10: NamespaceId = NamespaceId::new(15);
/// `cp` (core properties).
pub const CP: NamespaceId = NamespaceId::new(16);
/// `dc`.
pub const DC: NamespaceId = NamespaceId::new(17);
/// `dcterms`.
pub const DCTERMS: NamespaceId = NamespaceId::new(18);
/// `xsi`.
pub const XSI: NamespaceId = NamespaceId::new(19);
/// `ap` (extended properties).
pub const AP: NamespaceId = NamespaceId::new(20);
/// `vt` (variant types).
pub const VT: NamespaceId = NamespaceId::new(21);
/// `w14`.
pub const W14: NamespaceId = NamespaceId::new(22);
/// `w15`.
pub const W15: NamespaceId = NamespaceId::new(23);
/// `a14`.
pub const A14: NamespaceId = NamespaceId::new(24);
/// `x14`.
pub const X14: NamespaceId = NamespaceId::new(25);
/// `p14`.
pub const P14: NamespaceId = NamespaceId::new(26);

/// `(id, prefix, uri)` rows of the built-in table, in id order.
/// Id 0 (the empty namespace) is seeded by [`RegistryBuilder::build`].
pub const BUILTIN: &[(NamespaceId, &str, &str)] = &[
    (XMLNS, "xmlns", uris::XMLNS),
    (XML, "xml", uris::XML),
    (R, "r", uris::R),
    (MC, "mc", uris::MC),
    (A, "a", uris::A),
    (C, "c", uris::C),
    (PIC, "pic", uris::PIC),
    (WP, "wp", uris::WP),
    (W, "w", uris::W),
    (X, "x", uris::X),
    (P, "p", uris::P),
    (M, "m", uris::M),
    (V, "v", uris::V),
    (O, "o", uris::O),
    (W10, "w10", uris::W10),
    (CP, "cp", uris::CP),
    (DC, "dc", uris::DC),
    (DCTERMS, "dcterms", uris::DCTERMS),
    (XSI, "xsi", uris::XSI),
    (AP, "ap", uris::AP),
    (VT, "vt", uris::VT),
    (W14, "w14", uris::W14),
    (W15, "w15", uris::W15),
    (A14, "a14", uris::A14),
    (X14, "x14", uris::X14),
    (P14, "p14", uris::P14),
];

/// Returns a builder pre-populated with the built-in table.
///
/// # Errors
///
/// Returns an error only if [`BUILTIN`] itself violates the registry
/// invariants.
pub fn builtin_builder() -> Result<RegistryBuilder> {
    let mut builder = NamespaceRegistry::builder();
    for &(id, prefix, uri) in BUILTIN {
        builder.register(id, prefix, uri)?;
    }
    Ok(builder)
}

/// Builds a registry holding exactly the built-in table.
///
/// # Errors
///
/// Returns an error only if [`BUILTIN`] itself violates the registry
/// invariants.
pub fn builtin() -> Result<NamespaceRegistry> {
    Ok(builtin_builder()?.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_consistent() {
        let registry = builtin();
        assert!(registry.is_ok(), "{:?}", registry.err());
    }

    #[test]
    fn builtin_ids_are_dense() {
        for (offset, &(id, _, _)) in BUILTIN.iter().enumerate() {
            assert_eq!(usize::from(id.get()), offset + 1);
        }
    }

    #[test]
    fn wordprocessing_id_resolves() -> Result<()> {
        let registry = builtin()?;
        assert_eq!(registry.get_namespace_uri(W), Some(uris::W));
        assert_eq!(registry.get_namespace_id(uris::W)?, W);
        Ok(())
    }
}
