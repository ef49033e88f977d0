//! Property tests for combatant, engine and stash invariants

use proptest::prelude::*;

use skirmish::combat::{
    run_single_encounter, run_team_encounter, AdversaryType, Combatant, EventKind, PartyClass,
    RoleKind, Side, Verdict,
};
use skirmish::core::{seeded, EncounterRules, GameConfig};
use skirmish::inventory::{Category, Item, Rarity, Stash};

fn rarity() -> impl Strategy<Value = Rarity> {
    prop_oneof![
        Just(Rarity::Common),
        Just(Rarity::Rare),
        Just(Rarity::Legendary)
    ]
}

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Potion),
        Just(Category::Weapon),
        Just(Category::Trash)
    ]
}

fn item() -> impl Strategy<Value = Item> {
    ("[a-z]{1,8}", 0u32..500, rarity(), category()).prop_map(|(name, cents, rarity, category)| {
        Item::new(name, f64::from(cents) / 4.0, rarity, category).unwrap()
    })
}

fn full_stash(items: Vec<Item>) -> Stash {
    let mut stash = Stash::new("prop", items.len());
    for item in items {
        stash.add(item).unwrap();
    }
    stash
}

proptest! {
    #[test]
    fn hp_stays_in_bounds(start in 1i32..200, hits in prop::collection::vec(-100i32..100, 0..40)) {
        let mut c = Combatant::new(RoleKind::Party(PartyClass::Bard), 1, start);
        for amount in hits {
            c.take_damage(amount);
            prop_assert!(c.current_hp() >= 0);
            prop_assert!(c.current_hp() <= c.max_hp());
            prop_assert_eq!(c.is_alive(), c.current_hp() > 0);
        }
    }

    #[test]
    fn single_encounter_always_resolves(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = seeded(seed);
        let mut hero = Combatant::random_party(&mut rng, &config);
        let mut enemy = Combatant::random_adversary(&mut rng, &config);

        let outcome = run_single_encounter(&mut hero, &mut enemy, &mut rng, &config.rules);

        prop_assert!(matches!(outcome.verdict, Verdict::PartyWins | Verdict::AdversaryWins));
        prop_assert!(!(hero.is_alive() && enemy.is_alive()));
    }

    #[test]
    fn team_never_grows(seed in any::<u64>(), size in 0usize..6) {
        let config = GameConfig::default();
        let mut rng = seeded(seed);
        let mut team: Vec<Combatant> = (0..size)
            .map(|_| Combatant::random_party(&mut rng, &config))
            .collect();
        let mut enemy = Combatant::new(RoleKind::Adversary(AdversaryType::Demon), 10, 64);

        let outcome = run_team_encounter(&mut team, &mut enemy, &mut rng, &EncounterRules::default());

        let fallen = outcome.log.count(EventKind::Fallen, Side::Adversary);
        prop_assert!(team.len() <= size);
        prop_assert_eq!(team.len() + fallen, size);
        prop_assert!(team.iter().all(Combatant::is_alive));
        match outcome.verdict {
            Verdict::PartyWins => prop_assert!(!enemy.is_alive()),
            Verdict::AdversaryWins => prop_assert!(team.is_empty()),
            Verdict::Pending => prop_assert!(false, "encounter left pending"),
        }
    }

    #[test]
    fn sort_is_idempotent(items in prop::collection::vec(item(), 0..30)) {
        let mut once = full_stash(items);
        once.sort();
        let mut twice = once.clone();
        twice.sort();
        prop_assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn sort_orders_by_rarity_then_value(items in prop::collection::vec(item(), 0..30)) {
        let mut stash = full_stash(items);
        stash.sort();
        for pair in stash.items().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.rarity() > b.rarity()
                    || (a.rarity() == b.rarity() && a.value() >= b.value())
            );
        }
    }

    #[test]
    fn liquidate_removes_exactly_trash(items in prop::collection::vec(item(), 0..30)) {
        let expected_gold: f64 = items
            .iter()
            .filter(|i| i.category() == Category::Trash)
            .map(Item::value)
            .sum();
        let kept: Vec<Item> = items
            .iter()
            .filter(|i| i.category() != Category::Trash)
            .cloned()
            .collect();

        let mut stash = full_stash(items);
        let gold = stash.liquidate();

        prop_assert!((gold - expected_gold).abs() < 1e-9);
        prop_assert_eq!(stash.items(), kept.as_slice());
    }
}
