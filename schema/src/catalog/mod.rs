//! Attribute tables of the built-in model types.
//!
//! Each sub-module covers one markup vocabulary. Abstract base types
//! (`CT_OnOff`, `CT_HpsMeasure`) have their own tables, and concrete
//! elements derive from them with [`AttributeTable::derive`].

pub mod drawing;
pub mod wordprocessing;

use crate::table::AttributeTable;
use crate::Result;

/// Returns every built-in table, wordprocessing first.
///
/// # Errors
///
/// Returns an error only if a built-in declaration is malformed.
pub fn all() -> Result<Vec<AttributeTable>> {
    let mut tables = wordprocessing::tables()?;
    tables.extend(drawing::tables()?);
    Ok(tables)
}

/// Returns the built-in table for `element`, e.g. `"w:rFonts"`.
///
/// # Errors
///
/// Returns an error only if a built-in declaration is malformed.
pub fn find(element: &str) -> Result<Option<AttributeTable>> {
    Ok(all()?.into_iter().find(|t| t.element() == element))
}
