//! Bounded item stash
//!
//! Items keep insertion order until sorted. Only potions (on use) and trash
//! (on liquidation) ever leave the stash on their own.

use std::cmp::Reverse;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inventory::item::{Category, Item, ItemEffect};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StashError {
    #[error("Stash is full! ({capacity} slots)")]
    Full { capacity: usize },

    #[error("No item in slot {slot}")]
    EmptySlot { slot: usize },
}

/// A player's inventory with fixed capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stash {
    owner: String,
    capacity: usize,
    items: Vec<Item>,
}

impl Stash {
    pub fn new(owner: impl Into<String>, capacity: usize) -> Self {
        Self {
            owner: owner.into(),
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append an item, failing when every slot is taken
    pub fn add(&mut self, item: Item) -> Result<(), StashError> {
        if self.is_full() {
            return Err(StashError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Stable sort: rarity descending, then value descending
    pub fn sort(&mut self) {
        self.items
            .sort_by_key(|item| (Reverse(item.rarity()), Reverse(OrderedFloat(item.value()))));
    }

    /// Remove every trash item and return the gold they fetch
    pub fn liquidate(&mut self) -> f64 {
        let (trash, keep): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.category() == Category::Trash);
        self.items = keep;

        let gold: f64 = trash.iter().map(Item::value).sum();
        tracing::debug!(sold = trash.len(), gold, "Liquidated trash");
        gold
    }

    /// Item at a 0-based index
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Remove the first item equal to `item`
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let index = self.items.iter().position(|candidate| candidate == item)?;
        Some(self.items.remove(index))
    }

    /// Use the item at a 0-based index
    ///
    /// Potions are consumed; weapons and trash stay where they are.
    pub fn use_item(&mut self, index: usize) -> Result<ItemEffect, StashError> {
        let rule = self
            .items
            .get(index)
            .map(Item::use_rule)
            .ok_or(StashError::EmptySlot { slot: index + 1 })?;
        if rule.consumed {
            self.items.remove(index);
        }
        Ok(rule.effect)
    }

    /// 1-indexed listing, one line per item
    pub fn display_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("[{}] {}", i + 1, item))
            .collect()
    }
}

impl fmt::Display for Stash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stash Content: {}", self.display_lines().join(", "))
    }
}
