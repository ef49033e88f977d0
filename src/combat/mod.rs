pub mod combatant;
pub mod engine;
pub mod events;
pub mod roster;

pub use combatant::Combatant;
pub use engine::{run_single_encounter, run_team_encounter, EncounterOutcome, Verdict};
pub use events::{EncounterEvent, EncounterLog, EventKind};
pub use roster::{AdversaryType, PartyClass, RoleKind, RoleProfile, Side};
