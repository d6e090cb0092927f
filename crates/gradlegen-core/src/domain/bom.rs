//! Bill-of-materials imports.

use std::cmp::Reverse;

use crate::domain::version::VersionReference;

/// A managed-versions import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bom {
    pub(crate) group: String,
    pub(crate) artifact: String,
    pub(crate) version: VersionReference,
    pub(crate) order: i32,
}

/// BOMs keyed by id. Iteration for rendering is by descending `order`
/// (higher = imported first, giving it precedence); ties keep insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct BomContainer {
    items: Vec<(String, Bom)>,
}

impl BomContainer {
    pub fn add(
        &mut self,
        id: impl Into<String>,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: VersionReference,
    ) {
        self.add_ordered(id, group, artifact, version, 0);
    }

    pub fn add_ordered(
        &mut self,
        id: impl Into<String>,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: VersionReference,
        order: i32,
    ) {
        let id = id.into();
        let bom = Bom {
            group: group.into(),
            artifact: artifact.into(),
            version,
            order,
        };
        match self.items.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = bom,
            None => self.items.push((id, bom)),
        }
    }

    /// BOMs in the order they must appear in the script.
    pub fn in_import_order(&self) -> Vec<&Bom> {
        let mut boms: Vec<&Bom> = self.items.iter().map(|(_, bom)| bom).collect();
        // Stable sort: equal orders keep insertion order.
        boms.sort_by_key(|bom| Reverse(bom.order));
        boms
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_order_imports_first() {
        let mut container = BomContainer::default();
        container.add_ordered("b", "com.example", "b-deps", VersionReference::value("1"), 2);
        container.add_ordered("a", "com.example", "a-deps", VersionReference::value("1"), 5);

        let artifacts: Vec<_> = container
            .in_import_order()
            .iter()
            .map(|bom| bom.artifact.as_str())
            .collect();
        assert_eq!(artifacts, ["a-deps", "b-deps"]);
    }

    #[test]
    fn equal_orders_keep_insertion_order() {
        let mut container = BomContainer::default();
        container.add("first", "com.example", "first-deps", VersionReference::value("1"));
        container.add("second", "com.example", "second-deps", VersionReference::value("1"));

        let artifacts: Vec<_> = container
            .in_import_order()
            .iter()
            .map(|bom| bom.artifact.as_str())
            .collect();
        assert_eq!(artifacts, ["first-deps", "second-deps"]);
    }
}
