//! Inventory - item counts shared by every behavior (singleton, stored in engine)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Oil,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: HashMap<ItemType, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: ItemType, quantity: u32) -> Self {
        self.add(item, quantity);
        self
    }

    pub fn quantity(&self, item: ItemType) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn add(&mut self, item: ItemType, quantity: u32) {
        let entry = self.items.entry(item).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Remove up to `quantity`; returns how many were actually removed.
    pub fn remove(&mut self, item: ItemType, quantity: u32) -> u32 {
        let Some(entry) = self.items.get_mut(&item) else {
            return 0;
        };
        let removed = quantity.min(*entry);
        *entry -= removed;
        removed
    }
}
