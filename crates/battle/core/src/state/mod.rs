//! Battle state: the two combatants, the active turn and the victor.
//!
//! [`BattleState`] is the aggregate the presentation layer reads after every
//! resolution step. It is mutated only through [`crate::engine::BattleEngine`]
//! and replaced wholesale on reset.

mod combatant;
mod side;

pub use combatant::{Combatant, CombatantTemplate, ResourceMeter};
pub use side::{Side, Sides};

use crate::error::DefinitionError;
use crate::log::BattleLog;

/// Everything needed to (re)start a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSetup {
    pub combatants: Sides<CombatantTemplate>,
    pub first_turn: Side,
}

impl BattleSetup {
    pub fn new(player: CombatantTemplate, opponent: CombatantTemplate) -> Self {
        Self {
            combatants: Sides::new(player, opponent),
            first_turn: Side::Player,
        }
    }

    #[must_use]
    pub fn with_first_turn(mut self, side: Side) -> Self {
        self.first_turn = side;
        self
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        self.combatants.player.validate()?;
        self.combatants.opponent.validate()
    }
}

/// Coarse battle status derived from the victor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStatus {
    InProgress,
    Concluded { victor: Side },
}

/// Where the engine is inside the two-phase resolution of one move.
///
/// Anything other than `Idle` means a resolution is in flight and new
/// submissions are refused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionPhase {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// A move was accepted; its outcome has not been applied yet.
    Resolving,
    /// The outcome was applied; waiting for recovery before the next move.
    Recovering,
}

/// The mutable battle aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub(crate) combatants: Sides<Combatant>,
    pub(crate) turn: Side,
    pub(crate) victor: Option<Side>,
    pub(crate) phase: ResolutionPhase,
    /// Battle generation; a reset starts the next epoch.
    pub(crate) epoch: u64,
    /// Accepted submissions within this epoch.
    pub(crate) nonce: u64,
    pub(crate) log: BattleLog,
}

impl BattleState {
    /// Builds a fresh battle for epoch 0.
    pub fn new(setup: &BattleSetup) -> Result<Self, DefinitionError> {
        Self::with_epoch(setup, 0)
    }

    /// Builds a fresh battle: both combatants at full health, the starting
    /// side active, no victor, empty log.
    pub fn with_epoch(setup: &BattleSetup, epoch: u64) -> Result<Self, DefinitionError> {
        setup.validate()?;
        Ok(Self {
            combatants: Sides::new(
                Combatant::from_template(&setup.combatants.player),
                Combatant::from_template(&setup.combatants.opponent),
            ),
            turn: setup.first_turn,
            victor: None,
            phase: ResolutionPhase::Idle,
            epoch,
            nonce: 0,
            log: BattleLog::new(),
        })
    }

    /// Replacement state for a reset: same setup, next epoch.
    pub fn reset(&self, setup: &BattleSetup) -> Result<Self, DefinitionError> {
        Self::with_epoch(setup, self.epoch + 1)
    }

    pub fn status(&self) -> BattleStatus {
        match self.victor {
            Some(victor) => BattleStatus::Concluded { victor },
            None => BattleStatus::InProgress,
        }
    }

    pub fn is_concluded(&self) -> bool {
        self.victor.is_some()
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn victor(&self) -> Option<Side> {
        self.victor
    }

    pub fn phase(&self) -> ResolutionPhase {
        self.phase
    }

    /// True while a resolution is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase != ResolutionPhase::Idle
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side]
    }

    pub fn combatants(&self) -> &Sides<Combatant> {
        &self.combatants
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    #[cfg(test)]
    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side]
    }
}
