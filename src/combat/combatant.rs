//! Combatant model
//!
//! A combatant is created once per encounter and only changes through
//! [`Combatant::take_damage`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::roster::{
    AdversaryType, PartyClass, RoleKind, RoleProfile, Side, ATTACK_ROLL_OFFSET,
};
use crate::core::{Dice, GameConfig};

/// A party member or adversary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub kind: RoleKind,
    pub level: u32,
    current_hp: i32,
    max_hp: i32,
    profile: RoleProfile,
}

impl Combatant {
    /// Create a combatant at full health with the roster profile for `kind`
    pub fn new(kind: RoleKind, level: u32, max_hp: i32) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            kind,
            level,
            current_hp: max_hp,
            max_hp,
            profile: kind.profile(),
        }
    }

    /// Roll a random party member: class, then level, then HP
    pub fn random_party<D: Dice + ?Sized>(dice: &mut D, config: &GameConfig) -> Self {
        let class = PartyClass::ALL[dice.roll(PartyClass::ALL.len() as u32) as usize];
        let level = roll_level(dice, config);
        let max_hp = roll_hp(dice, config.party_hp_base, config.party_hp_spread);
        Self::new(RoleKind::Party(class), level, max_hp)
    }

    /// Roll a random adversary: type, then level, then HP
    pub fn random_adversary<D: Dice + ?Sized>(dice: &mut D, config: &GameConfig) -> Self {
        let kind = AdversaryType::ALL[dice.roll(AdversaryType::ALL.len() as u32) as usize];
        let level = roll_level(dice, config);
        let max_hp = roll_hp(dice, config.adversary_hp_base, config.adversary_hp_spread);
        Self::new(RoleKind::Adversary(kind), level, max_hp)
    }

    /// Override the base damage from the roster
    pub fn with_base_damage(mut self, base_damage: i32) -> Self {
        self.profile.base_damage = base_damage;
        self
    }

    /// Override the dodge chance (percent)
    pub fn with_dodge_chance(mut self, percent: u32) -> Self {
        self.profile.dodge_chance = percent.min(99);
        self
    }

    /// Override the flee chance (percent)
    pub fn with_flee_chance(mut self, percent: u32) -> Self {
        self.profile.flee_chance = percent.min(99);
        self
    }

    /// Reset both current and max HP
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.max_hp = hp.max(0);
        self.current_hp = self.max_hp;
        self
    }

    pub fn side(&self) -> Side {
        self.kind.side()
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn base_damage(&self) -> i32 {
        self.profile.base_damage
    }

    pub fn dodge_chance(&self) -> u32 {
        self.profile.dodge_chance
    }

    pub fn flee_chance(&self) -> u32 {
        self.profile.flee_chance
    }

    /// Display name used in the event log
    pub fn name(&self) -> String {
        match self.kind {
            RoleKind::Party(class) => format!("Level {} {}", self.level, class.name()),
            RoleKind::Adversary(kind) => format!("{} (Lvl {})", kind.name(), self.level),
        }
    }

    /// Base damage plus `roll(width) - 3`
    ///
    /// The result can be negative for weak kinds; it is not clamped here.
    pub fn roll_attack<D: Dice + ?Sized>(&self, dice: &mut D) -> i32 {
        self.profile.base_damage + dice.roll(self.profile.roll_width) as i32 - ATTACK_ROLL_OFFSET
    }

    /// Always draws, even at 0%
    pub fn roll_dodge<D: Dice + ?Sized>(&self, dice: &mut D) -> bool {
        dice.roll(100) < self.profile.dodge_chance
    }

    pub fn roll_flee<D: Dice + ?Sized>(&self, dice: &mut D) -> bool {
        dice.roll(100) < self.profile.flee_chance
    }

    /// Apply damage, clamped to `0..=max_hp`
    ///
    /// A negative amount is a buff. If it lifts HP past `max_hp`, `max_hp`
    /// rises with it, so a boss can be given extra health before a team
    /// fight with `take_damage(-80)`.
    pub fn take_damage(&mut self, amount: i32) {
        let hp = self.current_hp.saturating_sub(amount);
        if amount < 0 && hp > self.max_hp {
            self.max_hp = hp;
        }
        self.current_hp = hp.clamp(0, self.max_hp);
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }
}

fn roll_level<D: Dice + ?Sized>(dice: &mut D, config: &GameConfig) -> u32 {
    let levels = config.level_range();
    levels.start() + dice.roll(levels.end() - levels.start() + 1)
}

/// `base + roll(spread)`, saturating instead of wrapping
fn roll_hp<D: Dice + ?Sized>(dice: &mut D, base: i32, spread: u32) -> i32 {
    let extra = i32::try_from(dice.roll(spread)).unwrap_or(i32::MAX);
    base.saturating_add(extra)
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name())?;
        match self.side() {
            Side::Party => writeln!(f, "HP: {}/{}", self.current_hp, self.max_hp)?,
            Side::Adversary => writeln!(f, "HP: {}", self.current_hp)?,
        }
        write!(f, "DMG: {}", self.profile.base_damage)
    }
}
