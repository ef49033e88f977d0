//! Dice: the single source of randomness
//!
//! Every roll in an encounter goes through [`Dice`], so a seeded generator
//! replays the same fight draw for draw.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Uniform integer source
pub trait Dice {
    /// Roll a value in `0..sides`. `sides` must be non-zero.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.gen_range(0..sides)
    }
}

/// Create the seeded generator used by sessions and the CLI
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed list of raw rolls, cycling when exhausted
///
/// Each value is reduced modulo the requested `sides`, so scripts never
/// produce an out-of-range roll.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
    draws: usize,
}

impl ScriptedDice {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        let script: VecDeque<u32> = script.into_iter().collect();
        assert!(!script.is_empty(), "scripted dice needs at least one roll");
        Self { script, draws: 0 }
    }

    /// Number of rolls consumed so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        // Non-empty by construction
        let value = self.script.pop_front().unwrap_or(0);
        self.script.push_back(value);
        self.draws += 1;
        value % sides
    }
}
