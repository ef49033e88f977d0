pub mod item;
pub mod stash;

pub use item::{Category, Item, ItemEffect, ItemError, Rarity, UseRule};
pub use stash::{Stash, StashError};
