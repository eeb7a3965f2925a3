//! Injectable random source for damage variance, critical hits and move choice.
//!
//! Rules never draw from global randomness. Every random decision goes through
//! a [`RandomSource`] handed to the engine, so tests can force exact outcomes
//! with [`FixedRolls`] and replays can reproduce a battle with [`PcgRng`].

use crate::config::VariationRange;

/// Source of uniform samples consumed by the battle rules.
///
/// Only [`next_unit`](RandomSource::next_unit) is required; the provided
/// methods derive every roll from it and may be overridden to force outcomes.
pub trait RandomSource: Send {
    /// Returns a uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Draws a damage variation factor from `range`.
    fn roll_variation(&mut self, range: VariationRange) -> f64 {
        range.sample(self.next_unit())
    }

    /// Returns true with probability `chance`.
    fn roll_critical(&mut self, chance: f64) -> bool {
        self.next_unit() < chance
    }

    /// Picks an index in `0..len` uniformly (0 when `len` is 0).
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.next_unit() * len as f64) as usize;
        scaled.min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn roll_variation(&mut self, range: VariationRange) -> f64 {
        (**self).roll_variation(range)
    }

    fn roll_critical(&mut self, chance: f64) -> bool {
        (**self).roll_critical(chance)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state. Same seed, same
/// sequence, on every platform.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

/// Random source with pinned outcomes.
///
/// Every variation roll returns `variation`, every critical roll returns
/// `critical` and every choice returns `choice` (clamped to the range).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRolls {
    pub variation: f64,
    pub critical: bool,
    pub choice: usize,
}

impl FixedRolls {
    /// Neutral rolls: variation 1.0, no critical, first move.
    pub const fn neutral() -> Self {
        Self {
            variation: 1.0,
            critical: false,
            choice: 0,
        }
    }

    #[must_use]
    pub const fn with_variation(mut self, variation: f64) -> Self {
        self.variation = variation;
        self
    }

    #[must_use]
    pub const fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    #[must_use]
    pub const fn with_choice(mut self, choice: usize) -> Self {
        self.choice = choice;
        self
    }
}

impl Default for FixedRolls {
    fn default() -> Self {
        Self::neutral()
    }
}

impl RandomSource for FixedRolls {
    fn next_unit(&mut self) -> f64 {
        0.0
    }

    fn roll_variation(&mut self, _range: VariationRange) -> f64 {
        self.variation
    }

    fn roll_critical(&mut self, _chance: f64) -> bool {
        self.critical
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.choice.min(len.saturating_sub(1))
    }
}
