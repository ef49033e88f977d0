//! Game configuration with documented constants
//!
//! Generation ranges, encounter rules and stash sizing live here. A config
//! can be loaded from TOML; missing fields fall back to the defaults.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Rules the engine applies to every encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterRules {
    /// HP granted to the adversary before a team fight starts
    ///
    /// Applied as `take_damage(-team_hp_bonus)` so a lone boss can stand up
    /// to three attackers.
    pub team_hp_bonus: i32,

    /// Upper bound on rounds before the fight is called for the adversary
    ///
    /// Only reachable with degenerate stats (every roll dealing zero).
    pub max_rounds: u32,

    /// Name the party goes by in team fight verdicts
    pub squad_name: String,
}

impl Default for EncounterRules {
    fn default() -> Self {
        Self {
            team_hp_bonus: 80,
            max_rounds: 1000,
            squad_name: "SQUAD".to_string(),
        }
    }
}

/// Configuration for generation, encounters and the stash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === GENERATION ===
    /// Lowest level a generated combatant can have
    pub min_level: u32,
    /// Highest level a generated combatant can have
    pub max_level: u32,

    /// Party max HP is `party_hp_base + roll(party_hp_spread)`
    ///
    /// Defaults give 20..=34.
    pub party_hp_base: i32,
    pub party_hp_spread: u32,

    /// Adversary max HP is `adversary_hp_base + roll(adversary_hp_spread)`
    ///
    /// Defaults give 25..=64.
    pub adversary_hp_base: i32,
    pub adversary_hp_spread: u32,

    // === ENCOUNTERS ===
    /// Members generated for a team fight
    pub team_size: usize,
    pub rules: EncounterRules,

    // === INVENTORY ===
    /// Slots in a new stash
    pub stash_capacity: usize,
    /// Entries kept per leaderboard
    pub leaderboard_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: 10,
            party_hp_base: 20,
            party_hp_spread: 15,
            adversary_hp_base: 25,
            adversary_hp_spread: 40,
            team_size: 3,
            rules: EncounterRules::default(),
            stash_capacity: 20,
            leaderboard_size: 10,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Level range generated combatants are drawn from
    pub fn level_range(&self) -> RangeInclusive<u32> {
        self.min_level..=self.max_level
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_level == 0 || self.min_level > self.max_level {
            return Err(GameError::Config(format!(
                "level range {}..={} must be non-empty and start at 1 or above",
                self.min_level, self.max_level
            )));
        }

        // HP must start positive so a fresh combatant is alive
        if self.party_hp_base <= 0 || self.adversary_hp_base <= 0 {
            return Err(GameError::Config("HP bases must be positive".into()));
        }

        if self.party_hp_spread == 0 || self.adversary_hp_spread == 0 {
            return Err(GameError::Config("HP spreads must be at least 1".into()));
        }

        // Largest generated HP must still fit in an i32
        for (base, spread) in [
            (self.party_hp_base, self.party_hp_spread),
            (self.adversary_hp_base, self.adversary_hp_spread),
        ] {
            if i64::from(base) + i64::from(spread) - 1 > i64::from(i32::MAX) {
                return Err(GameError::Config(format!(
                    "HP base {} plus spread {} overflows",
                    base, spread
                )));
            }
        }

        if self.team_size == 0 {
            return Err(GameError::Config("team_size must be at least 1".into()));
        }

        if self.rules.team_hp_bonus < 0 {
            return Err(GameError::Config(
                "team_hp_bonus cannot be negative".into(),
            ));
        }

        if self.rules.max_rounds == 0 {
            return Err(GameError::Config("max_rounds must be at least 1".into()));
        }

        if self.stash_capacity == 0 || self.leaderboard_size == 0 {
            return Err(GameError::Config(
                "stash_capacity and leaderboard_size must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
