//! Skirmish - turn-based encounter simulation with a bounded loot stash

pub mod combat;
pub mod core;
pub mod inventory;
pub mod session;
