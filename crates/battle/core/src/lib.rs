//! Deterministic rules for a two-combatant, turn-based battle.
//!
//! `battle-core` defines the canonical rules (type effectiveness, damage,
//! battle state machine, battle log) and exposes pure APIs that the runtime
//! drives. All state mutation flows through [`engine::BattleEngine`]; every
//! random decision is drawn from an injected [`env::RandomSource`].
pub mod combat;
pub mod config;
pub mod element;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod moves;
pub mod policy;
pub mod state;

pub use combat::{DamageRoll, EffectivenessTier};
pub use config::{BattleConfig, VariationRange};
pub use element::ElementType;
pub use engine::{BattleEngine, PendingResolution, TurnOutcome};
pub use env::{BattleEnv, EffectivenessTable, FixedRolls, PcgRng, RandomSource, TypeChart};
pub use error::{
    BattleError, ConfigError, DefinitionError, ErrorSeverity, StaleResolution, SubmitError,
};
pub use log::BattleLog;
pub use moves::Move;
pub use policy::{OpponentPolicy, UniformPolicy};
pub use state::{
    BattleSetup, BattleState, BattleStatus, Combatant, CombatantTemplate, ResolutionPhase,
    ResourceMeter, Side, Sides,
};
