//! Per-type attribute tables.
//!
//! Each model type owns one [`AttributeTable`] mapping its field names to
//! their [`AttributeDescriptor`]s. A derived type starts from a copy of its
//! base type's table and overrides or appends entries, so lookups never walk
//! a type hierarchy.

use std::borrow::Cow;

use crate::descriptor::AttributeDescriptor;
use crate::model::NamespaceId;

/// One field of a model type together with its attribute descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEntry {
    /// Field name in the model type.
    pub field: Cow<'static, str>,
    /// The attribute the field maps to.
    pub descriptor: AttributeDescriptor,
}

/// Ordered field → descriptor table of one model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable {
    element: Cow<'static, str>,
    entries: Vec<AttributeEntry>,
}

impl AttributeTable {
    /// Creates an empty table for the element named `element`.
    pub fn new(element: impl Into<Cow<'static, str>>) -> Self {
        Self {
            element: element.into(),
            entries: Vec::new(),
        }
    }

    /// Creates a table for `element` starting from a copy of `base`.
    pub fn derive(element: impl Into<Cow<'static, str>>, base: &AttributeTable) -> Self {
        Self {
            element: element.into(),
            entries: base.entries.clone(),
        }
    }

    /// Declares `field`. An entry already present under the same field name
    /// (typically copied from the base table) is replaced in place, keeping
    /// its position.
    #[must_use]
    pub fn declare(
        mut self,
        field: impl Into<Cow<'static, str>>,
        descriptor: AttributeDescriptor,
    ) -> Self {
        let field = field.into();
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.descriptor = descriptor,
            None => self.entries.push(AttributeEntry { field, descriptor }),
        }
        self
    }

    /// Qualified element name of the owning type (e.g. `"w:rFonts"`).
    #[must_use]
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Descriptor of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&AttributeDescriptor> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.descriptor)
    }

    /// First entry whose descriptor names `(namespace_id, tag)`.
    #[must_use]
    pub fn find(&self, namespace_id: NamespaceId, tag: &str) -> Option<&AttributeEntry> {
        self.entries
            .iter()
            .find(|e| e.descriptor.namespace_id() == namespace_id && e.descriptor.tag() == tag)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeEntry> {
        self.entries.iter()
    }

    /// Entries ordered for output: ascending index, declaration order among
    /// equal indexes, unspecified indexes last.
    #[must_use]
    pub fn serialization_order(&self) -> Vec<&AttributeEntry> {
        let mut ordered: Vec<&AttributeEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.descriptor.index());
        ordered
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeTable {
    type Item = &'a AttributeEntry;
    type IntoIter = std::slice::Iter<'a, AttributeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::{R, W};
    use crate::Result;

    fn base() -> Result<AttributeTable> {
        Ok(AttributeTable::new("w:onOff").declare("val", AttributeDescriptor::new(W, "val")?))
    }

    #[test]
    fn derived_table_copies_base_entries() -> Result<()> {
        let base = base()?;
        let bold = AttributeTable::derive("w:b", &base);
        assert_eq!(bold.element(), "w:b");
        assert_eq!(bold.get("val"), base.get("val"));
        assert_eq!(base.element(), "w:onOff");
        Ok(())
    }

    #[test]
    fn declare_overrides_in_place() -> Result<()> {
        let table = AttributeTable::derive("w:x", &base()?)
            .declare("id", AttributeDescriptor::new(R, "id")?)
            .declare("val", AttributeDescriptor::with_index(W, "val", 1)?);
        let fields: Vec<&str> = table.iter().map(|e| e.field.as_ref()).collect();
        assert_eq!(fields, vec!["val", "id"]);
        assert_eq!(table.get("val").map(AttributeDescriptor::index), Some(1));
        Ok(())
    }

    #[test]
    fn find_by_namespace_and_tag() -> Result<()> {
        let table = base()?.declare("rel", AttributeDescriptor::new(R, "id")?);
        assert_eq!(table.find(R, "id").map(|e| e.field.as_ref()), Some("rel"));
        assert!(table.find(W, "id").is_none());
        Ok(())
    }

    #[test]
    fn serialization_order_puts_unspecified_last() -> Result<()> {
        let table = AttributeTable::new("w:t")
            .declare("loose", AttributeDescriptor::new(W, "loose")?)
            .declare("second", AttributeDescriptor::with_index(W, "second", 1)?)
            .declare("first", AttributeDescriptor::with_index(W, "first", 0)?)
            .declare("tied", AttributeDescriptor::with_index(W, "tied", 1)?);
        let order: Vec<&str> = table
            .serialization_order()
            .into_iter()
            .map(|e| e.descriptor.tag())
            .collect();
        assert_eq!(order, vec!["first", "second", "tied", "loose"]);
        Ok(())
    }
}
