// 🗂️ Catalog - ordered collection of loaded items
//
// Insertion order until sorted; every sort is stable, so equal keys keep
// their previous relative order.

use crate::item::Item;

/// Key for `Catalog::sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Price,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Append one item at the end (load-time only)
    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // SORTING
    // ========================================================================

    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Id => self.sort_by_id(),
            SortKey::Name => self.sort_by_name(),
            SortKey::Price => self.sort_by_price(),
        }
    }

    /// Ascending by id
    pub fn sort_by_id(&mut self) {
        self.items.sort_by_key(|item| item.id());
    }

    /// Ascending by name, byte-wise
    pub fn sort_by_name(&mut self) {
        self.items.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Ascending by price
    pub fn sort_by_price(&mut self) {
        self.items.sort_by(|a, b| a.price().total_cmp(&b.price()));
    }

    // ========================================================================
    // DISPLAY
    // ========================================================================

    /// One formatted line per item, in current order
    pub fn display(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Catalog {
            items: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
