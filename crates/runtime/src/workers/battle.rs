//! Battle worker that owns the authoritative [`battle_core::BattleState`].
//!
//! Receives commands from [`crate::BattleHandle`], runs the two-phase
//! resolution through [`battle_core::BattleEngine`], and publishes events to
//! the EventBus.
//!
//! Pacing delays are modelled as scheduled steps polled by the same `select!`
//! loop that drains commands, so the worker is the only thread of control
//! that ever touches the battle. The resolution pipeline holds at most one
//! step. The automated side's think delay runs on its own slot from the
//! moment its turn begins, so it overlaps the recovery window; if it elapses
//! while the battle is still recovering, the move is played as soon as
//! recovery ends. A reset drops every scheduled step; a step that still
//! fires against a newer epoch is refused by the engine.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use battle_core::{
    BattleEngine, BattleState, OpponentPolicy, PendingResolution, RandomSource, Side, SubmitError,
};

use crate::api::{Result, RuntimeError};
use crate::events::{BattleEvent, EventBus, PresentationEvent};
use crate::oracle::BattleOracle;

/// Commands that can be sent to the battle worker
pub enum Command {
    /// Submit a move; answered as soon as it is accepted or rejected.
    SubmitMove {
        side: Side,
        move_name: String,
        reply: oneshot::Sender<Result<PendingResolution>>,
    },
    /// Replace the battle with a fresh one of the next epoch.
    ResetBattle {
        reply: oneshot::Sender<Result<BattleState>>,
    },
    /// Query the current battle state (read-only).
    QueryState { reply: oneshot::Sender<BattleState> },
    /// Query the battle log, most recent first.
    QueryLog { reply: oneshot::Sender<Vec<String>> },
}

/// Delays between resolution phases and the side the worker plays itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Submission → outcome applied.
    pub attack_delay: Duration,
    /// Outcome applied → next submission accepted.
    pub recovery_delay: Duration,
    /// Automated side's turn begins → its move is submitted.
    pub opponent_delay: Duration,
    pub automated_side: Option<Side>,
}

/// The next thing the worker will do on its own.
#[derive(Debug)]
enum Step {
    Resolve(PendingResolution),
    Recover { epoch: u64, nonce: u64 },
    AutomatedTurn { epoch: u64, side: Side },
}

impl Step {
    fn label(&self) -> &'static str {
        match self {
            Step::Resolve(_) => "resolve",
            Step::Recover { .. } => "recover",
            Step::AutomatedTurn { .. } => "automated_turn",
        }
    }
}

#[derive(Debug)]
struct Scheduled {
    at: Instant,
    step: Step,
}

/// Background task that processes battle commands and paced steps.
pub struct BattleWorker {
    state: BattleState,
    oracle: BattleOracle,
    rng: Box<dyn RandomSource>,
    policy: Arc<dyn OpponentPolicy>,
    pacing: Pacing,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    /// Next step of the resolution pipeline.
    scheduled: Option<Scheduled>,
    /// Pending think delay of the automated side.
    automated: Option<Scheduled>,
    /// Automated turn whose delay elapsed during recovery.
    deferred: Option<(u64, Side)>,
}

impl BattleWorker {
    /// Creates a new battle worker.
    pub fn new(
        state: BattleState,
        oracle: BattleOracle,
        rng: Box<dyn RandomSource>,
        policy: Arc<dyn OpponentPolicy>,
        pacing: Pacing,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            player = state.combatant(Side::Player).name(),
            opponent = state.combatant(Side::Opponent).name(),
            first_turn = %state.turn(),
            automated_side = ?pacing.automated_side,
            "BattleWorker initialized"
        );

        Self {
            state,
            oracle,
            rng,
            policy,
            pacing,
            command_rx,
            event_bus,
            scheduled: None,
            automated: None,
            deferred: None,
        }
    }

    /// Main worker loop.
    ///
    /// Exits once every command sender is gone; a pending step is dropped.
    pub async fn run(mut self) {
        self.schedule_automated_turn();

        loop {
            let deadline = self.scheduled.as_ref().map(|s| s.at);
            let think_deadline = self.automated.as_ref().map(|s| s.at);

            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(scheduled) = self.scheduled.take() {
                        self.run_step(scheduled.step);
                    }
                }
                () = sleep_until(think_deadline.unwrap_or_else(Instant::now)), if think_deadline.is_some() => {
                    if let Some(scheduled) = self.automated.take() {
                        self.run_step(scheduled.step);
                    }
                }
            }
        }

        info!(target: "runtime::worker", epoch = self.state.epoch(), "BattleWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SubmitMove {
                side,
                move_name,
                reply,
            } => {
                let result = self.submit(side, &move_name).map_err(RuntimeError::Rejected);
                if reply.send(result).is_err() {
                    debug!("SubmitMove reply channel closed (caller dropped)");
                }
            }
            Command::ResetBattle { reply } => {
                let result = self.reset();
                if reply.send(result).is_err() {
                    debug!("ResetBattle reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::QueryLog { reply } => {
                if reply.send(self.state.log().to_vec()).is_err() {
                    debug!("QueryLog reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Schedules `step` after `delay`, replacing whatever occupied its slot.
    fn schedule(&mut self, delay: Duration, step: Step) {
        debug!(
            target: "runtime::worker",
            step = step.label(),
            delay_ms = delay.as_millis() as u64,
            "Step scheduled"
        );
        let slot = match step {
            Step::AutomatedTurn { .. } => &mut self.automated,
            _ => &mut self.scheduled,
        };
        *slot = Some(Scheduled {
            at: Instant::now() + delay,
            step,
        });
    }

    fn run_step(&mut self, step: Step) {
        match step {
            Step::Resolve(pending) => self.resolve(pending),
            Step::Recover { epoch, nonce } => self.recover(epoch, nonce),
            Step::AutomatedTurn { epoch, side } => self.play_automated_turn(epoch, side),
        }
    }

    /// First phase: validate, mark busy, schedule the resolution.
    fn submit(
        &mut self,
        side: Side,
        move_name: &str,
    ) -> std::result::Result<PendingResolution, SubmitError> {
        let mut engine = BattleEngine::new(&mut self.state);

        let pending = match engine.submit(side, move_name) {
            Ok(pending) => pending,
            Err(reason) => {
                debug!(
                    target: "runtime::worker",
                    side = %side,
                    move_name,
                    code = battle_core::BattleError::error_code(&reason),
                    error = %reason,
                    "Submission rejected"
                );
                self.event_bus.publish(BattleEvent::SubmissionRejected {
                    side,
                    move_name: move_name.to_owned(),
                    reason: reason.clone(),
                });
                return Err(reason);
            }
        };

        debug!(
            target: "runtime::worker",
            epoch = pending.epoch,
            nonce = pending.nonce,
            side = %side,
            move_name,
            "Move accepted"
        );

        self.event_bus.publish(BattleEvent::MoveAccepted {
            epoch: pending.epoch,
            nonce: pending.nonce,
            side,
            move_name: pending.mv.name.clone(),
        });
        self.event_bus.publish(PresentationEvent::MoveCast {
            side,
            element: pending.mv.element,
        });

        self.schedule(self.pacing.attack_delay, Step::Resolve(pending.clone()));
        Ok(pending)
    }

    /// Second phase: apply the outcome, then schedule recovery.
    fn resolve(&mut self, pending: PendingResolution) {
        let env = self.oracle.as_battle_env();
        let mut engine = BattleEngine::new(&mut self.state);

        let outcome = match engine.resolve(&pending, &env, self.rng.as_mut()) {
            Ok(outcome) => outcome,
            Err(stale) => {
                debug!(target: "runtime::worker", error = %stale, "Stale resolution discarded");
                return;
            }
        };

        debug!(
            target: "runtime::worker",
            epoch = pending.epoch,
            nonce = pending.nonce,
            attacker = %outcome.attacker,
            damage = outcome.roll.damage,
            critical = outcome.roll.critical,
            effectiveness = outcome.roll.effectiveness,
            defender_health = outcome.defender_health,
            "Turn resolved"
        );

        let defender = outcome.defender;
        let victor = outcome.victor;

        self.event_bus.publish(BattleEvent::TurnResolved {
            epoch: pending.epoch,
            nonce: pending.nonce,
            outcome: Box::new(outcome),
        });
        self.event_bus
            .publish(PresentationEvent::HitReaction { side: defender });

        // The defender's turn begins now, even though it must wait out recovery.
        self.schedule_automated_turn();

        if let Some(victor) = victor {
            info!(
                target: "runtime::worker",
                epoch = pending.epoch,
                victor = %victor,
                "Battle concluded"
            );
            self.event_bus.publish(BattleEvent::BattleConcluded {
                epoch: pending.epoch,
                victor,
            });
        }

        self.schedule(
            self.pacing.recovery_delay,
            Step::Recover {
                epoch: pending.epoch,
                nonce: pending.nonce,
            },
        );
    }

    /// End of the trailing delay: accept submissions again.
    fn recover(&mut self, epoch: u64, nonce: u64) {
        if !BattleEngine::new(&mut self.state).recover(epoch, nonce) {
            debug!(target: "runtime::worker", epoch, nonce, "Stale recovery discarded");
            return;
        }

        if !self.state.is_concluded() {
            self.event_bus.publish(BattleEvent::TurnReady {
                epoch,
                turn: self.state.turn(),
            });
        }
        if let Some((epoch, side)) = self.deferred.take() {
            self.play_automated_turn(epoch, side);
        }
    }

    /// Starts the automated side's think delay if its turn has begun.
    fn schedule_automated_turn(&mut self) {
        let Some(side) = self.pacing.automated_side else {
            return;
        };
        if self.state.is_concluded() || self.state.turn() != side {
            return;
        }
        self.schedule(
            self.pacing.opponent_delay,
            Step::AutomatedTurn {
                epoch: self.state.epoch(),
                side,
            },
        );
    }

    fn play_automated_turn(&mut self, epoch: u64, side: Side) {
        let state = &self.state;
        if state.epoch() != epoch || state.is_concluded() || state.turn() != side {
            debug!(target: "runtime::worker", epoch, side = %side, "Automated turn suppressed");
            return;
        }
        if state.is_busy() {
            debug!(target: "runtime::worker", epoch, side = %side, "Automated turn waits for recovery");
            self.deferred = Some((epoch, side));
            return;
        }

        let Some(chosen) = self
            .policy
            .choose_move(state.combatant(side), self.rng.as_mut())
            .map(|mv| mv.name.clone())
        else {
            warn!(target: "runtime::worker", side = %side, "Policy chose no move");
            return;
        };

        debug!(
            target: "runtime::worker",
            side = %side,
            move_name = %chosen,
            "Automated move chosen"
        );
        if let Err(reason) = self.submit(side, &chosen) {
            warn!(
                target: "runtime::worker",
                side = %side,
                move_name = %chosen,
                code = battle_core::BattleError::error_code(&reason),
                "Automated move rejected"
            );
        }
    }

    fn reset(&mut self) -> Result<BattleState> {
        let next = self
            .state
            .reset(self.oracle.setup())
            .map_err(RuntimeError::InvalidSetup)?;

        for dropped in [self.scheduled.take(), self.automated.take()]
            .into_iter()
            .flatten()
        {
            debug!(
                target: "runtime::worker",
                step = dropped.step.label(),
                "Pending step cancelled by reset"
            );
        }
        self.deferred = None;
        self.state = next;

        info!(target: "runtime::worker", epoch = self.state.epoch(), "Battle reset");
        self.event_bus.publish(BattleEvent::BattleReset {
            epoch: self.state.epoch(),
        });

        self.schedule_automated_turn();
        Ok(self.state.clone())
    }
}
