//! Session controller
//!
//! Owns everything that lives across encounters: the RNG, the stash, the
//! leaderboards and the exporter. The engine itself never sees any of it
//! except the RNG.

pub mod export;
pub mod leaderboard;
pub mod menu;

pub use export::{export_file_name, LogExporter};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use menu::MenuChoice;

use rand_chacha::ChaCha8Rng;

use crate::combat::{run_single_encounter, run_team_encounter, Combatant, EncounterOutcome, Verdict};
use crate::core::{seeded, GameConfig, Result};
use crate::inventory::{Item, Stash, StashError};

/// Log file prefixes
pub const SINGLE_FIGHT_PREFIX: &str = "FightLog";
pub const TEAM_FIGHT_PREFIX: &str = "TeamFight";
pub const CHARACTER_PREFIX: &str = "CharacterLog";

/// One player's run of the game
#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub player: String,
    pub stash: Stash,
    pub fights_won: Leaderboard,
    pub bosses_slain: Leaderboard,
    rng: ChaCha8Rng,
    exporter: Option<LogExporter>,
    victories: u64,
    boss_victories: u64,
}

impl Session {
    /// Start a session; the config is validated first so generation never
    /// draws from an empty range
    pub fn new(config: GameConfig, player: impl Into<String>, seed: u64) -> Result<Self> {
        config.validate()?;
        let player = player.into();
        let stash = Stash::new(player.clone(), config.stash_capacity);
        let fights_won = Leaderboard::with_size("Enemies Killed", config.leaderboard_size);
        let bosses_slain = Leaderboard::with_size("Bosses Killed", config.leaderboard_size);
        Ok(Self {
            config,
            player,
            stash,
            fights_won,
            bosses_slain,
            rng: seeded(seed),
            exporter: None,
            victories: 0,
            boss_victories: 0,
        })
    }

    /// Export every log through `exporter`
    pub fn with_exporter(mut self, exporter: LogExporter) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn generate_character(&mut self) -> Combatant {
        let character = Combatant::random_party(&mut self.rng, &self.config);
        tracing::info!(name = %character.name(), "Generated character");
        let card = character.to_string();
        self.export(CHARACTER_PREFIX, card.lines());
        character
    }

    pub fn generate_enemy(&mut self) -> Combatant {
        Combatant::random_adversary(&mut self.rng, &self.config)
    }

    /// One fresh character against one fresh adversary
    pub fn single_fight(&mut self) -> EncounterOutcome {
        let mut character = Combatant::random_party(&mut self.rng, &self.config);
        let mut enemy = Combatant::random_adversary(&mut self.rng, &self.config);

        let outcome =
            run_single_encounter(&mut character, &mut enemy, &mut self.rng, &self.config.rules);

        if outcome.verdict == Verdict::PartyWins {
            self.victories += 1;
            self.fights_won.record_best(self.player.clone(), self.victories);
        }
        self.export(SINGLE_FIGHT_PREFIX, outcome.log.lines());
        outcome
    }

    /// A fresh squad of `team_size` against one buffed adversary
    pub fn team_fight(&mut self) -> EncounterOutcome {
        let mut team: Vec<Combatant> = (0..self.config.team_size)
            .map(|_| Combatant::random_party(&mut self.rng, &self.config))
            .collect();
        let mut enemy = Combatant::random_adversary(&mut self.rng, &self.config);

        let outcome = run_team_encounter(&mut team, &mut enemy, &mut self.rng, &self.config.rules);

        if outcome.verdict == Verdict::PartyWins {
            self.boss_victories += 1;
            self.bosses_slain
                .record_best(self.player.clone(), self.boss_victories);
        }
        self.export(TEAM_FIGHT_PREFIX, outcome.log.lines());
        outcome
    }

    /// Put loot in the stash; when it is full the loot is discarded
    pub fn loot(&mut self, item: Item) -> std::result::Result<(), StashError> {
        let name = item.name().to_string();
        self.stash.add(item).map_err(|err| {
            tracing::warn!(item = %name, "{err}, loot discarded");
            err
        })
    }

    fn export<'a>(&self, prefix: &str, lines: impl IntoIterator<Item = &'a str>) {
        let Some(exporter) = &self.exporter else {
            return;
        };
        // Export failures never touch session state
        if let Err(err) = exporter.write(prefix, lines) {
            tracing::warn!("{prefix} export failed: {err}");
        }
    }
}
