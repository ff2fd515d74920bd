//! DrawingML attribute tables.
//!
//! DrawingML attributes are mostly unqualified, so they use the empty
//! namespace; relationship references stay in `r:`.

use crate::descriptor::AttributeDescriptor;
use crate::model::NamespaceId;
use crate::namespaces::R;
use crate::table::AttributeTable;
use crate::Result;

/// Returns all drawing tables.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn tables() -> Result<Vec<AttributeTable>> {
    Ok(vec![rgb_color()?, extent()?, blip()?])
}

/// `a:srgbClr`.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn rgb_color() -> Result<AttributeTable> {
    Ok(AttributeTable::new("a:srgbClr")
        .declare("val", AttributeDescriptor::with_index(NamespaceId::EMPTY, "val", 0)?))
}

/// `wp:extent`.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn extent() -> Result<AttributeTable> {
    Ok(AttributeTable::new("wp:extent")
        .declare("cx", AttributeDescriptor::with_index(NamespaceId::EMPTY, "cx", 0)?)
        .declare("cy", AttributeDescriptor::with_index(NamespaceId::EMPTY, "cy", 1)?))
}

/// `a:blip`.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn blip() -> Result<AttributeTable> {
    Ok(AttributeTable::new("a:blip")
        .declare("embed", AttributeDescriptor::with_index(R, "embed", 0)?)
        .declare("link", AttributeDescriptor::with_index(R, "link", 1)?)
        .declare("compression_state", AttributeDescriptor::with_index(NamespaceId::EMPTY, "cstate", 2)?))
}
