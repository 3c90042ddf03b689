// In-memory holder for the currently loaded items
use shared::models::Item;

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        ItemCatalog { items }
    }

    /// Swaps in a freshly loaded feed, returning the new item count.
    pub fn replace_items(&mut self, items: Vec<Item>) -> usize {
        self.items = items;
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_items() {
        let mut catalog = ItemCatalog::new();
        assert!(catalog.is_empty());

        let count = catalog.replace_items(vec![
            Item::new("Kettle", 30.0, "2024-01-01"),
            Item::new("Toaster", 45.0, "2024-02-01"),
        ]);
        assert_eq!(count, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].name, "Toaster");

        catalog.replace_items(Vec::new());
        assert!(catalog.is_empty());
    }
}
