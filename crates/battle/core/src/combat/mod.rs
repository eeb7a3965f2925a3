//! Combat resolution system.
//!
//! Pure functions for resolving one attack against a defender. Randomness is
//! drawn from the injected [`crate::env::RandomSource`]; nothing here touches
//! battle state.
//!
//! # Core Functions
//!
//! - `resolve`: variation + critical + effectiveness → clamped damage
//! - `EffectivenessTier::classify`: multiplier → message tier

pub mod damage;
pub mod effectiveness;

pub use damage::{DamageRoll, resolve};
pub use effectiveness::EffectivenessTier;
