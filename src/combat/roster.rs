//! Role kinds and their combat profiles
//!
//! Per-kind behavior is data: one lookup table instead of branching in the
//! engine.

use serde::{Deserialize, Serialize};

/// Player-side classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyClass {
    Barbarian,
    Wizard,
    Archer,
    Bard,
}

impl PartyClass {
    /// Generation order; a roll of `i` picks `ALL[i]`
    pub const ALL: [PartyClass; 4] = [
        PartyClass::Barbarian,
        PartyClass::Wizard,
        PartyClass::Archer,
        PartyClass::Bard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PartyClass::Barbarian => "Barbarian",
            PartyClass::Wizard => "Wizard",
            PartyClass::Archer => "Archer",
            PartyClass::Bard => "Bard",
        }
    }
}

/// Adversary types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdversaryType {
    Boar,
    Orc,
    Undead,
    Demon,
}

impl AdversaryType {
    pub const ALL: [AdversaryType; 4] = [
        AdversaryType::Boar,
        AdversaryType::Orc,
        AdversaryType::Undead,
        AdversaryType::Demon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AdversaryType::Boar => "Boar",
            AdversaryType::Orc => "Orc",
            AdversaryType::Undead => "Undead",
            AdversaryType::Demon => "Demon",
        }
    }
}

/// Which side of an encounter a combatant fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Party,
    Adversary,
}

/// A combatant's kind, tagged by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    Party(PartyClass),
    Adversary(AdversaryType),
}

impl RoleKind {
    pub fn side(&self) -> Side {
        match self {
            RoleKind::Party(_) => Side::Party,
            RoleKind::Adversary(_) => Side::Adversary,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoleKind::Party(class) => class.name(),
            RoleKind::Adversary(kind) => kind.name(),
        }
    }

    /// Look up the combat profile for this kind
    pub fn profile(&self) -> RoleProfile {
        let base_damage = match self {
            RoleKind::Party(PartyClass::Barbarian) => 9,
            RoleKind::Party(PartyClass::Wizard) => 8,
            RoleKind::Party(PartyClass::Archer) => 7,
            RoleKind::Party(PartyClass::Bard) => 6,
            RoleKind::Adversary(AdversaryType::Boar | AdversaryType::Undead) => 5,
            RoleKind::Adversary(AdversaryType::Orc) => 7,
            RoleKind::Adversary(AdversaryType::Demon) => 9,
        };

        match self.side() {
            Side::Party => RoleProfile {
                base_damage,
                roll_width: PARTY_ROLL_WIDTH,
                dodge_chance: PARTY_DODGE_CHANCE,
                flee_chance: PARTY_FLEE_CHANCE,
            },
            Side::Adversary => RoleProfile {
                base_damage,
                roll_width: ADVERSARY_ROLL_WIDTH,
                dodge_chance: 0,
                flee_chance: 0,
            },
        }
    }
}

/// Offset subtracted from every attack roll
pub const ATTACK_ROLL_OFFSET: i32 = 3;

/// Party attacks land in `base - 3 ..= base + 2`
pub const PARTY_ROLL_WIDTH: u32 = 6;
/// Adversary attacks land in `base - 3 ..= base + 3`
pub const ADVERSARY_ROLL_WIDTH: u32 = 7;

/// Percent chance the party dodges a retaliation
pub const PARTY_DODGE_CHANCE: u32 = 15;
/// Percent chance the party flees after taking a hit (off by default)
pub const PARTY_FLEE_CHANCE: u32 = 0;

/// Combat numbers derived from a role kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub base_damage: i32,
    /// Width of the attack roll, `roll(width) - 3` is added to base damage
    pub roll_width: u32,
    /// Percent, compared against `roll(100)`
    pub dodge_chance: u32,
    /// Percent, compared against `roll(100)`
    pub flee_chance: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_profiles() {
        let barbarian = RoleKind::Party(PartyClass::Barbarian).profile();
        assert_eq!(barbarian.base_damage, 9);
        assert_eq!(barbarian.roll_width, 6);
        assert_eq!(barbarian.dodge_chance, 15);

        assert_eq!(RoleKind::Party(PartyClass::Bard).profile().base_damage, 6);
    }

    #[test]
    fn test_adversaries_never_dodge_or_flee() {
        for kind in AdversaryType::ALL {
            let profile = RoleKind::Adversary(kind).profile();
            assert_eq!(profile.dodge_chance, 0);
            assert_eq!(profile.flee_chance, 0);
            assert_eq!(profile.roll_width, 7);
        }
    }

    #[test]
    fn test_boar_and_undead_share_damage() {
        let boar = RoleKind::Adversary(AdversaryType::Boar).profile();
        let undead = RoleKind::Adversary(AdversaryType::Undead).profile();
        assert_eq!(boar.base_damage, undead.base_damage);
        assert_eq!(RoleKind::Adversary(AdversaryType::Demon).profile().base_damage, 9);
    }
}
