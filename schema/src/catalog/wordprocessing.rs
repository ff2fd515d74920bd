//! `w:` (WordprocessingML) attribute tables.
//!
//! Run properties and paragraph-level elements. `w:b`, `w:i` and
//! `w:strike` share the `CT_OnOff` table; `w:sz` and `w:szCs` share
//! `CT_HpsMeasure`.

use crate::descriptor::AttributeDescriptor;
use crate::namespaces::{R, W, W14};
use crate::table::AttributeTable;
use crate::Result;

/// Returns all wordprocessing tables, base types before derived ones.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn tables() -> Result<Vec<AttributeTable>> {
    let on_off = on_off()?;
    let hps_measure = hps_measure()?;
    Ok(vec![
        AttributeTable::derive("w:b", &on_off),
        AttributeTable::derive("w:i", &on_off),
        AttributeTable::derive("w:strike", &on_off),
        AttributeTable::derive("w:sz", &hps_measure),
        AttributeTable::derive("w:szCs", &hps_measure),
        on_off,
        hps_measure,
        run_fonts()?,
        color()?,
        paragraph()?,
        hyperlink()?,
    ])
}

/// `CT_OnOff`: a single optional toggle value.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn on_off() -> Result<AttributeTable> {
    Ok(AttributeTable::new("w:CT_OnOff").declare("val", AttributeDescriptor::with_index(W, "val", 0)?))
}

/// `CT_HpsMeasure`: a size in half-points.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn hps_measure() -> Result<AttributeTable> {
    Ok(AttributeTable::new("w:CT_HpsMeasure")
        .declare("val", AttributeDescriptor::with_index(W, "val", 0)?))
}

/// `w:rFonts`.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn run_fonts() -> Result<AttributeTable> {
    Ok(AttributeTable::new("w:rFonts")
        .declare("hint", AttributeDescriptor::with_index(W, "hint", 0)?)
        .declare("ascii", AttributeDescriptor::with_index(W, "ascii", 1)?)
        .declare("high_ansi", AttributeDescriptor::with_index(W, "hAnsi", 2)?)
        .declare("east_asia", AttributeDescriptor::with_index(W, "eastAsia", 3)?)
        .declare("complex_script", AttributeDescriptor::with_index(W, "cs", 4)?)
        .declare("ascii_theme", AttributeDescriptor::with_index(W, "asciiTheme", 5)?)
        .declare("high_ansi_theme", AttributeDescriptor::with_index(W, "hAnsiTheme", 6)?)
        .declare("east_asia_theme", AttributeDescriptor::with_index(W, "eastAsiaTheme", 7)?)
        .declare("complex_script_theme", AttributeDescriptor::with_index(W, "cstheme", 8)?))
}

/// `w:color`.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn color() -> Result<AttributeTable> {
    Ok(AttributeTable::new("w:color")
        .declare("val", AttributeDescriptor::with_index(W, "val", 0)?)
        .declare("theme_color", AttributeDescriptor::with_index(W, "themeColor", 1)?)
        .declare("theme_tint", AttributeDescriptor::with_index(W, "themeTint", 2)?)
        .declare("theme_shade", AttributeDescriptor::with_index(W, "themeShade", 3)?))
}

/// `w:p`. Revision ids come first, then the Word 2010 paragraph ids.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn paragraph() -> Result<AttributeTable> {
    Ok(AttributeTable::new("w:p")
        .declare("rsid_run_properties", AttributeDescriptor::with_index(W, "rsidRPr", 0)?)
        .declare("rsid_run_addition", AttributeDescriptor::with_index(W, "rsidR", 1)?)
        .declare("rsid_deletion", AttributeDescriptor::with_index(W, "rsidDel", 2)?)
        .declare("rsid_properties", AttributeDescriptor::with_index(W, "rsidP", 3)?)
        .declare("rsid_default", AttributeDescriptor::with_index(W, "rsidRDefault", 4)?)
        .declare("paragraph_id", AttributeDescriptor::with_index(W14, "paraId", 5)?)
        .declare("text_id", AttributeDescriptor::with_index(W14, "textId", 6)?))
}

/// `w:hyperlink`. Declared without explicit order.
///
/// # Errors
///
/// Returns an error only if a declaration is malformed.
pub fn hyperlink() -> Result<AttributeTable> {
    Ok(AttributeTable::new("w:hyperlink")
        .declare("target_frame", AttributeDescriptor::new(W, "tgtFrame")?)
        .declare("tooltip", AttributeDescriptor::new(W, "tooltip")?)
        .declare("anchor", AttributeDescriptor::new(W, "anchor")?)
        .declare("history", AttributeDescriptor::new(W, "history")?)
        .declare("id", AttributeDescriptor::new(R, "id")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::uris;

    #[test]
    fn bold_and_italic_share_on_off() -> Result<()> {
        let tables = tables()?;
        let val = |element: &str| {
            tables
                .iter()
                .find(|t| t.element() == element)
                .and_then(|t| t.get("val").cloned())
        };
        assert!(val("w:b").is_some());
        assert_eq!(val("w:b"), val("w:i"));
        assert_eq!(val("w:sz"), val("w:CT_HpsMeasure"));
        Ok(())
    }

    #[test]
    fn paragraph_ids_live_in_w14() -> Result<()> {
        let p = paragraph()?;
        let para_id = p.get("paragraph_id");
        assert_eq!(para_id.map(|d| d.namespace_uri()), Some(uris::W14));
        Ok(())
    }

    #[test]
    fn hyperlink_relationship_id() -> Result<()> {
        let link = hyperlink()?;
        assert_eq!(link.find(R, "id").map(|e| e.field.as_ref()), Some("id"));
        assert!(link.iter().all(|e| !e.descriptor.has_explicit_index()));
        Ok(())
    }
}
