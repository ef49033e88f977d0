//! Encounter event log
//!
//! The engine records what happened; renderers and exporters decide how
//! to show it. Each event carries a ready-made `text` line.

use serde::{Deserialize, Serialize};

use crate::combat::roster::Side;

/// What kind of event this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Opening line with both sides' HP
    Start,
    Attack,
    Dodge,
    Flee,
    /// A party member dropped to 0 HP and left the fight
    Fallen,
    Verdict,
}

/// A single entry in the encounter log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEvent {
    pub actor: Side,
    pub target: Side,
    pub kind: EventKind,
    /// Damage dealt (attacks only)
    pub amount: Option<i32>,
    /// Target HP after the event (attacks only)
    pub hp_after: Option<i32>,
    pub text: String,
}

/// Append-only, ordered record of an encounter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterLog {
    events: Vec<EncounterEvent>,
}

impl EncounterLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: EncounterEvent) {
        self.events.push(event);
    }

    pub fn start(&mut self, text: String) {
        self.push(EncounterEvent {
            actor: Side::Party,
            target: Side::Adversary,
            kind: EventKind::Start,
            amount: None,
            hp_after: None,
            text,
        });
    }

    pub fn attack(&mut self, actor: Side, target: Side, amount: i32, hp_after: i32, text: String) {
        self.push(EncounterEvent {
            actor,
            target,
            kind: EventKind::Attack,
            amount: Some(amount),
            hp_after: Some(hp_after),
            text,
        });
    }

    /// The party evaded the adversary's retaliation
    pub fn dodge(&mut self, text: String) {
        self.push(EncounterEvent {
            actor: Side::Party,
            target: Side::Adversary,
            kind: EventKind::Dodge,
            amount: None,
            hp_after: None,
            text,
        });
    }

    pub fn flee(&mut self, text: String) {
        self.push(EncounterEvent {
            actor: Side::Party,
            target: Side::Adversary,
            kind: EventKind::Flee,
            amount: None,
            hp_after: None,
            text,
        });
    }

    pub fn fallen(&mut self, text: String) {
        self.push(EncounterEvent {
            actor: Side::Adversary,
            target: Side::Party,
            kind: EventKind::Fallen,
            amount: None,
            hp_after: Some(0),
            text,
        });
    }

    /// `winner` is recorded as the actor
    pub fn verdict(&mut self, winner: Side, text: String) {
        let target = match winner {
            Side::Party => Side::Adversary,
            Side::Adversary => Side::Party,
        };
        self.push(EncounterEvent {
            actor: winner,
            target,
            kind: EventKind::Verdict,
            amount: None,
            hp_after: None,
            text,
        });
    }

    pub fn events(&self) -> &[EncounterEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Count events of `kind` performed by `actor`
    pub fn count(&self, kind: EventKind, actor: Side) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == kind && e.actor == actor)
            .count()
    }

    /// One rendered line per event, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.text.as_str())
    }
}
