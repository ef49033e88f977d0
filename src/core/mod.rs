pub mod config;
pub mod dice;
pub mod error;

pub use config::{EncounterRules, GameConfig};
pub use dice::{seeded, Dice, ScriptedDice};
pub use error::{GameError, Result};
