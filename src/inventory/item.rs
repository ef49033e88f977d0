//! Loot items
//!
//! One record type for every item. What "using" an item does is looked up
//! by category.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item rarity, ordered from least to most valuable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "COMMON",
            Rarity::Rare => "RARE",
            Rarity::Legendary => "LEGENDARY",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Potion,
    Weapon,
    Trash,
}

/// Result of using an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    Heal(i32),
    AttackBonus(i32),
    Unusable,
}

impl ItemEffect {
    pub fn message(&self) -> String {
        match self {
            ItemEffect::Heal(hp) => format!("Drank potion, +{} HP", hp),
            ItemEffect::AttackBonus(atk) => format!("Equipped sword, +{} Atk", atk),
            ItemEffect::Unusable => "You cannot use this.".to_string(),
        }
    }
}

/// How a category behaves when used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseRule {
    pub effect: ItemEffect,
    /// Whether the item leaves the stash once used
    pub consumed: bool,
}

pub const POTION_HEAL: i32 = 50;
pub const WEAPON_ATTACK_BONUS: i32 = 10;

impl Category {
    /// Dispatch table for [`Item::use_rule`]
    pub fn use_rule(&self) -> UseRule {
        match self {
            Category::Potion => UseRule {
                effect: ItemEffect::Heal(POTION_HEAL),
                consumed: true,
            },
            Category::Weapon => UseRule {
                effect: ItemEffect::AttackBonus(WEAPON_ATTACK_BONUS),
                consumed: false,
            },
            Category::Trash => UseRule {
                effect: ItemEffect::Unusable,
                consumed: false,
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    #[error("item '{name}' has invalid value {value}; values must be finite and non-negative")]
    InvalidValue { name: String, value: f64 },
}

/// An immutable piece of loot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    value: f64,
    rarity: Rarity,
    category: Category,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        rarity: Rarity,
        category: Category,
    ) -> Result<Self, ItemError> {
        let name = name.into();
        if !value.is_finite() || value < 0.0 {
            return Err(ItemError::InvalidValue { name, value });
        }
        Ok(Self {
            name,
            value,
            rarity,
            category,
        })
    }

    pub fn potion(name: impl Into<String>, value: f64, rarity: Rarity) -> Result<Self, ItemError> {
        Self::new(name, value, rarity, Category::Potion)
    }

    pub fn weapon(name: impl Into<String>, value: f64, rarity: Rarity) -> Result<Self, ItemError> {
        Self::new(name, value, rarity, Category::Weapon)
    }

    pub fn trash(name: impl Into<String>, value: f64, rarity: Rarity) -> Result<Self, ItemError> {
        Self::new(name, value, rarity, Category::Trash)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn use_rule(&self) -> UseRule {
        self.category.use_rule()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - ${}", self.name, self.rarity, self.value)
    }
}
