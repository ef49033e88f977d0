//! Encounter engine integration tests
//!
//! Scripted dice pin every roll so each scenario plays out the same way
//! every time.

use skirmish::combat::{
    run_single_encounter, run_team_encounter, AdversaryType, Combatant, EventKind, PartyClass,
    RoleKind, Side, Verdict,
};
use skirmish::core::{seeded, EncounterRules, GameConfig, ScriptedDice};

fn party_member(hp: i32, base_damage: i32) -> Combatant {
    Combatant::new(RoleKind::Party(PartyClass::Archer), 2, hp).with_base_damage(base_damage)
}

fn adversary(hp: i32, base_damage: i32) -> Combatant {
    Combatant::new(RoleKind::Adversary(AdversaryType::Orc), 4, hp).with_base_damage(base_damage)
}

/// Party (20 HP, 10 per hit) vs adversary (25 HP, 0 per hit)
///
/// The third party hit kills, so round three has no retaliation.
#[test]
fn test_three_hits_to_win() {
    let mut party = party_member(20, 10);
    let mut enemy = adversary(25, 0);
    // attack roll 3 -> +0, dodge draw 99 -> miss, adversary roll 3 -> +0
    let mut dice = ScriptedDice::new([3, 99, 3]);

    let outcome = run_single_encounter(
        &mut party,
        &mut enemy,
        &mut dice,
        &EncounterRules::default(),
    );

    assert_eq!(outcome.verdict, Verdict::PartyWins);
    assert_eq!(enemy.current_hp(), 0);
    assert_eq!(party.current_hp(), 20);
    assert_eq!(outcome.log.count(EventKind::Attack, Side::Party), 3);
    assert_eq!(outcome.log.count(EventKind::Attack, Side::Adversary), 2);
    assert_eq!(outcome.rounds, 3);

    let hp_trail: Vec<Option<i32>> = outcome
        .log
        .events()
        .iter()
        .filter(|e| e.kind == EventKind::Attack && e.actor == Side::Party)
        .map(|e| e.hp_after)
        .collect();
    assert_eq!(hp_trail, vec![Some(15), Some(5), Some(0)]);
}

/// Three 1 HP members, adversary always hits for 1, party deals nothing
#[test]
fn test_squad_wiped_out() {
    let mut team = vec![party_member(1, 0), party_member(1, 0), party_member(1, 0)];
    let mut enemy = adversary(30, 1);
    // party roll 3 -> 0 damage, adversary roll 3 -> 1 damage
    let mut dice = ScriptedDice::new([3]);

    let outcome = run_team_encounter(&mut team, &mut enemy, &mut dice, &EncounterRules::default());

    assert_eq!(outcome.verdict, Verdict::AdversaryWins);
    assert!(team.is_empty());
    assert_eq!(outcome.log.count(EventKind::Fallen, Side::Adversary), 3);
    assert_eq!(outcome.rounds, 1);
    assert_eq!(
        outcome.log.lines().last(),
        Some("Orc (Lvl 4) Wins! The SQUAD was wiped out.")
    );
}

/// A member falling mid-round lets the next member act in the same round
#[test]
fn test_attrition_keeps_turn_order() {
    let mut team = vec![party_member(1, 3), party_member(40, 3), party_member(1, 3)];
    let mut enemy = adversary(10, 5);
    let mut dice = ScriptedDice::new([3]);
    let rules = EncounterRules {
        max_rounds: 2,
        ..EncounterRules::default()
    };

    let outcome = run_team_encounter(&mut team, &mut enemy, &mut dice, &rules);

    // Round 1: all three act, first and third fall. Round 2: survivor acts once.
    assert_eq!(outcome.log.count(EventKind::Fallen, Side::Adversary), 2);
    assert_eq!(outcome.log.count(EventKind::Attack, Side::Party), 4);
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].current_hp(), 30);
    assert_eq!(enemy.current_hp(), 90 - 4 * 3);
}

/// The adversary dying on the same swing a member would have fallen to is
/// still a party win
#[test]
fn test_adversary_death_checked_first() {
    let mut team = vec![party_member(1, 50)];
    let mut enemy = adversary(1, 20);
    let mut dice = ScriptedDice::new([3]);
    let rules = EncounterRules {
        team_hp_bonus: 0,
        ..EncounterRules::default()
    };

    let outcome = run_team_encounter(&mut team, &mut enemy, &mut dice, &rules);

    assert_eq!(outcome.verdict, Verdict::PartyWins);
    assert_eq!(outcome.log.lines().last(), Some("SQUAD WINS!"));
}

/// Seeded RNG replays the whole encounter
#[test]
fn test_seeded_encounters_replay() {
    let config = GameConfig::default();
    let play = |seed: u64| {
        let mut rng = seeded(seed);
        let mut team: Vec<Combatant> = (0..config.team_size)
            .map(|_| Combatant::random_party(&mut rng, &config))
            .collect();
        let mut enemy = Combatant::random_adversary(&mut rng, &config);
        run_team_encounter(&mut team, &mut enemy, &mut rng, &config.rules)
    };

    for seed in 0..20 {
        assert_eq!(play(seed), play(seed));
    }
}

/// Every random fight ends in a real verdict
#[test]
fn test_random_fights_always_resolve() {
    let config = GameConfig::default();
    let mut rng = seeded(2024);

    for _ in 0..500 {
        let mut hero = Combatant::random_party(&mut rng, &config);
        let mut enemy = Combatant::random_adversary(&mut rng, &config);
        let outcome = run_single_encounter(&mut hero, &mut enemy, &mut rng, &config.rules);

        assert_ne!(outcome.verdict, Verdict::Pending);
        assert_eq!(outcome.log.count(EventKind::Verdict, Side::Party)
            + outcome.log.count(EventKind::Verdict, Side::Adversary), 1);
        assert_eq!(
            outcome.verdict == Verdict::PartyWins,
            hero.is_alive() && !enemy.is_alive()
        );
    }
}
