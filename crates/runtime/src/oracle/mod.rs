//! Runtime wrappers around static battle content.
//!
//! [`BattleOracle`] bundles the setup, the effectiveness table and the battle
//! tunables so the worker can build [`battle_core::BattleEnv`] views on
//! demand. The data is immutable at runtime; dynamic state lives in
//! [`battle_core::BattleState`].
mod random;

use std::sync::Arc;

use battle_core::{BattleConfig, BattleEnv, BattleSetup, EffectivenessTable};

pub use random::StdRandom;

/// Static inputs of a battle, shared by every epoch.
#[derive(Clone)]
pub struct BattleOracle {
    pub(crate) setup: BattleSetup,
    pub(crate) table: Arc<dyn EffectivenessTable>,
    pub(crate) config: BattleConfig,
}

impl BattleOracle {
    pub fn new(setup: BattleSetup, table: Arc<dyn EffectivenessTable>, config: BattleConfig) -> Self {
        Self {
            setup,
            table,
            config,
        }
    }

    pub fn setup(&self) -> &BattleSetup {
        &self.setup
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Converts the oracle into the environment battle-core resolves against.
    pub fn as_battle_env(&self) -> BattleEnv<'_> {
        BattleEnv::new(self.table.as_ref(), &self.config)
    }
}

impl std::fmt::Debug for BattleOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleOracle")
            .field("setup", &self.setup)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
