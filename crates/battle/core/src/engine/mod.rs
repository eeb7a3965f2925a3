//! Move submission and resolution pipeline.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`].
//! One move flows through a two-phase commit:
//!
//! submit → resolve → recover
//!
//! `submit` validates and marks the battle busy, `resolve` applies the
//! outcome, and `recover` makes the battle ready for the next submission.
//! The runtime puts its pacing delays between the phases. Each phase is
//! tagged with the battle's epoch and nonce so that a step scheduled before a
//! reset can never touch the replacement battle.

mod outcome;

pub use outcome::{PendingResolution, TurnOutcome};

use crate::combat;
use crate::env::{BattleEnv, RandomSource};
use crate::error::{StaleResolution, SubmitError};
use crate::moves::Move;
use crate::state::{BattleState, ResolutionPhase, Side};

/// Battle engine that validates submissions and applies resolved moves.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    /// Checks whether `side` may use `move_name` right now.
    ///
    /// Rejections are reported in a fixed order: concluded battle, in-flight
    /// resolution, fainted attacker, wrong turn, unknown move.
    pub fn validate(&self, side: Side, move_name: &str) -> Result<&Move, SubmitError> {
        let state = &*self.state;

        if let Some(victor) = state.victor {
            return Err(SubmitError::BattleConcluded { victor });
        }
        if state.is_busy() {
            return Err(SubmitError::ResolutionInFlight);
        }
        let attacker = state.combatant(side);
        if attacker.is_fainted() {
            return Err(SubmitError::AttackerFainted { side });
        }
        if state.turn != side {
            return Err(SubmitError::WrongTurn {
                side,
                expected: state.turn,
            });
        }
        attacker
            .find_move(move_name)
            .ok_or_else(|| SubmitError::UnknownMove {
                side,
                name: move_name.to_owned(),
            })
    }

    /// Accepts a submission and marks the battle busy.
    ///
    /// A rejected submission leaves the state untouched.
    pub fn submit(&mut self, side: Side, move_name: &str) -> Result<PendingResolution, SubmitError> {
        let mv = self.validate(side, move_name)?.clone();

        self.state.turn = side;
        self.state.phase = ResolutionPhase::Resolving;
        self.state.nonce += 1;

        Ok(PendingResolution {
            epoch: self.state.epoch,
            nonce: self.state.nonce,
            attacker: side,
            mv,
        })
    }

    /// Applies a pending resolution.
    ///
    /// Rolls damage against the opposing combatant, lowers its health, sets
    /// the victor or hands the turn over, and records the turn's log lines.
    /// The battle stays busy until [`recover`](Self::recover).
    pub fn resolve<R: RandomSource + ?Sized>(
        &mut self,
        pending: &PendingResolution,
        env: &BattleEnv<'_>,
        rng: &mut R,
    ) -> Result<TurnOutcome, StaleResolution> {
        self.ensure_current(pending.epoch, pending.nonce, ResolutionPhase::Resolving)?;

        let attacker = pending.attacker;
        let defender = pending.defender();

        let roll = combat::resolve(&pending.mv, self.state.combatant(defender), env, rng);
        let defender_health = self.state.combatants[defender].take_damage(roll.damage);

        let victor = if defender_health == 0 {
            self.state.victor = Some(attacker);
            Some(attacker)
        } else {
            self.state.turn = defender;
            None
        };

        let outcome = TurnOutcome {
            attacker,
            defender,
            attacker_name: self.state.combatant(attacker).name().to_owned(),
            defender_name: self.state.combatant(defender).name().to_owned(),
            move_name: pending.mv.name.clone(),
            element: pending.mv.element,
            roll,
            tier: roll.tier(env),
            defender_health,
            victor,
        };

        self.state.log.record(&outcome);
        self.state.phase = ResolutionPhase::Recovering;

        Ok(outcome)
    }

    /// Ends the recovery window of the resolution tagged `epoch`/`nonce`.
    ///
    /// Returns false when the tag is stale or nothing is recovering.
    pub fn recover(&mut self, epoch: u64, nonce: u64) -> bool {
        if self
            .ensure_current(epoch, nonce, ResolutionPhase::Recovering)
            .is_err()
        {
            return false;
        }
        self.state.phase = ResolutionPhase::Idle;
        true
    }

    fn ensure_current(
        &self,
        epoch: u64,
        nonce: u64,
        phase: ResolutionPhase,
    ) -> Result<(), StaleResolution> {
        let state = &*self.state;
        if state.epoch == epoch && state.nonce == nonce && state.phase == phase {
            return Ok(());
        }
        Err(StaleResolution {
            pending_epoch: epoch,
            pending_nonce: nonce,
            current_epoch: state.epoch,
            current_nonce: state.nonce,
        })
    }
}
