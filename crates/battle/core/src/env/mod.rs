//! Read-only environment the rules consult while resolving a turn.
//!
//! [`BattleEnv`] bundles the effectiveness table and the battle tunables so
//! the engine and the damage resolver take a single borrowed argument. The
//! random source is passed separately because it is the only mutable input.

pub mod rng;
pub mod tables;

pub use rng::{FixedRolls, PcgRng, RandomSource};
pub use tables::{EffectivenessTable, TypeChart};

use crate::config::BattleConfig;

/// Borrowed view over the static inputs of a resolution.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    tables: &'a dyn EffectivenessTable,
    config: &'a BattleConfig,
}

impl<'a> BattleEnv<'a> {
    pub fn new(tables: &'a dyn EffectivenessTable, config: &'a BattleConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &'a dyn EffectivenessTable {
        self.tables
    }

    pub fn config(&self) -> &'a BattleConfig {
        self.config
    }
}

impl std::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
