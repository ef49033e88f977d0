//! Encounter resolution
//!
//! Each round: party attacks -> adversary retaliates (unless dodged) ->
//! casualties leave the fight. Runs to a verdict in one call.

use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::events::EncounterLog;
use crate::combat::roster::Side;
use crate::core::{Dice, EncounterRules};

/// Outcome of an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verdict {
    #[default]
    Pending,
    PartyWins,
    AdversaryWins,
}

impl Verdict {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Pending => None,
            Verdict::PartyWins => Some(Side::Party),
            Verdict::AdversaryWins => Some(Side::Adversary),
        }
    }
}

/// Event log and verdict of a finished encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterOutcome {
    pub log: EncounterLog,
    pub verdict: Verdict,
    /// Rounds started before the verdict
    pub rounds: u32,
}

/// Encounter in progress; the verdict is set exactly once
#[derive(Debug, Default)]
struct Encounter {
    log: EncounterLog,
    verdict: Verdict,
    rounds: u32,
}

impl Encounter {
    fn resolve(mut self, verdict: Verdict, text: String) -> EncounterOutcome {
        debug_assert_eq!(self.verdict, Verdict::Pending, "verdict already set");
        if let Some(winner) = verdict.winner() {
            self.log.verdict(winner, text);
        }
        self.verdict = verdict;
        EncounterOutcome {
            log: self.log,
            verdict: self.verdict,
            rounds: self.rounds,
        }
    }

    /// Start another round, or report that the round cap is hit
    fn next_round(&mut self, rules: &EncounterRules) -> bool {
        if self.rounds >= rules.max_rounds {
            tracing::warn!(
                rounds = self.rounds,
                "Encounter hit the round cap, calling it for the adversary"
            );
            return false;
        }
        self.rounds += 1;
        true
    }
}

/// Resolve a one-on-one fight
///
/// The party strikes first each round. An adversary killed by that strike
/// never retaliates. A successful dodge skips the adversary's attack.
/// If both fall, the adversary wins.
pub fn run_single_encounter<D: Dice + ?Sized>(
    party: &mut Combatant,
    adversary: &mut Combatant,
    dice: &mut D,
    rules: &EncounterRules,
) -> EncounterOutcome {
    let party_name = party.name();
    let adversary_name = adversary.name();

    let mut encounter = Encounter::default();
    encounter.log.start(format!(
        "FIGHT START: {} ({}HP) vs {} ({}HP)",
        party_name,
        party.current_hp(),
        adversary_name,
        adversary.current_hp()
    ));

    let mut fled = false;
    let mut capped = false;

    while party.is_alive() && adversary.is_alive() {
        if !encounter.next_round(rules) {
            capped = true;
            break;
        }

        let damage = party.roll_attack(dice);
        adversary.take_damage(damage);
        encounter.log.attack(
            Side::Party,
            Side::Adversary,
            damage,
            adversary.current_hp(),
            format!(
                "{} hits for {} | {} HP: {}",
                party_name,
                damage,
                adversary_name,
                adversary.current_hp()
            ),
        );

        if !adversary.is_alive() {
            break;
        }

        if party.roll_dodge(dice) {
            encounter
                .log
                .dodge(format!("{} dodged the attack!", party_name));
            continue;
        }

        let damage = adversary.roll_attack(dice);
        party.take_damage(damage);
        encounter.log.attack(
            Side::Adversary,
            Side::Party,
            damage,
            party.current_hp(),
            format!(
                "{} hits for {} | {} HP: {}",
                adversary_name,
                damage,
                party_name,
                party.current_hp()
            ),
        );

        // No draw is spent unless fleeing is possible
        if party.is_alive() && party.flee_chance() > 0 && party.roll_flee(dice) {
            encounter
                .log
                .flee(format!("{} fled the battle!", party_name));
            fled = true;
            break;
        }
    }

    let verdict = if !fled && !capped && party.is_alive() {
        Verdict::PartyWins
    } else {
        Verdict::AdversaryWins
    };

    tracing::debug!(
        rounds = encounter.rounds,
        ?verdict,
        fled,
        "Single encounter resolved"
    );

    let winner_name = match verdict {
        Verdict::PartyWins => &party_name,
        _ => &adversary_name,
    };
    encounter.resolve(verdict, format!("{} Wins!", winner_name))
}

/// Resolve a party of several members against one adversary
///
/// The adversary is buffed by `rules.team_hp_bonus` before the first round.
/// Members act in order; each one that survives its attack takes the
/// adversary's retaliation, and members reduced to 0 HP are removed from
/// `party`. Members already at 0 HP are removed before the fight and never
/// act. When the adversary dies the round ends at once.
pub fn run_team_encounter<D: Dice + ?Sized>(
    party: &mut Vec<Combatant>,
    adversary: &mut Combatant,
    dice: &mut D,
    rules: &EncounterRules,
) -> EncounterOutcome {
    let adversary_name = adversary.name();
    let squad = &rules.squad_name;
    let mut encounter = Encounter::default();

    party.retain(Combatant::is_alive);
    if party.is_empty() {
        return encounter.resolve(
            Verdict::AdversaryWins,
            format!("{} Wins! The {} never showed up.", adversary_name, squad),
        );
    }

    adversary.take_damage(-rules.team_hp_bonus);

    let roster = party
        .iter()
        .map(|member| format!("{} ({}HP)", member.name(), member.current_hp()))
        .collect::<Vec<_>>()
        .join(", ");
    encounter.log.start(format!(
        "TEAM BATTLE: {} vs {} (HP: {})",
        roster,
        adversary_name,
        adversary.current_hp()
    ));

    let mut capped = false;

    'rounds: while adversary.is_alive() && !party.is_empty() {
        if !encounter.next_round(rules) {
            capped = true;
            break;
        }

        // Index walk so a fallen member can be removed without skipping
        // the one behind it
        let mut index = 0;
        while index < party.len() {
            let member = &mut party[index];
            let member_name = member.name();

            let damage = member.roll_attack(dice);
            adversary.take_damage(damage);
            encounter.log.attack(
                Side::Party,
                Side::Adversary,
                damage,
                adversary.current_hp(),
                format!(
                    "{} hits {} for {} | {} HP: {}",
                    member_name,
                    adversary_name,
                    damage,
                    adversary_name,
                    adversary.current_hp()
                ),
            );

            if !adversary.is_alive() {
                break 'rounds;
            }

            let damage = adversary.roll_attack(dice);
            member.take_damage(damage);
            encounter.log.attack(
                Side::Adversary,
                Side::Party,
                damage,
                member.current_hp(),
                format!(
                    "{} hits {} for {} | {} HP: {}",
                    adversary_name,
                    member_name,
                    damage,
                    member_name,
                    member.current_hp()
                ),
            );

            if member.is_alive() {
                index += 1;
            } else {
                encounter
                    .log
                    .fallen(format!(">>> {} HAS FALLEN! <<<", member_name));
                party.remove(index);
            }
        }
    }

    let verdict = if adversary.is_alive() {
        Verdict::AdversaryWins
    } else {
        Verdict::PartyWins
    };

    tracing::debug!(
        rounds = encounter.rounds,
        ?verdict,
        survivors = party.len(),
        "Team encounter resolved"
    );

    let text = match verdict {
        Verdict::PartyWins => format!("{} WINS!", squad),
        _ if capped => format!("{} Wins! The {} could not finish it.", adversary_name, squad),
        _ => format!("{} Wins! The {} was wiped out.", adversary_name, squad),
    };
    encounter.resolve(verdict, text)
}
