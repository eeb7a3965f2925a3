//! Event types for different topics.

use battle_core::{ElementType, Side, SubmitError, TurnOutcome};
use serde::{Deserialize, Serialize};

/// Events describing battle state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A submission was accepted; its outcome is applied after the attack delay.
    MoveAccepted {
        epoch: u64,
        nonce: u64,
        side: Side,
        move_name: String,
    },

    /// A pending resolution was applied.
    TurnResolved {
        epoch: u64,
        nonce: u64,
        outcome: Box<TurnOutcome>,
    },

    /// The defender fainted; no further submissions are accepted this epoch.
    BattleConcluded { epoch: u64, victor: Side },

    /// Recovery finished and the battle accepts a submission from `turn`.
    TurnReady { epoch: u64, turn: Side },

    /// The battle was replaced by a fresh one.
    BattleReset { epoch: u64 },

    /// A submission was ignored; nothing changed.
    SubmissionRejected {
        side: Side,
        move_name: String,
        reason: SubmitError,
    },
}

/// Timing cues for the presentation layer. They carry no decision authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationEvent {
    /// `side` started an attack of the given element.
    MoveCast { side: Side, element: ElementType },

    /// `side` was struck.
    HitReaction { side: Side },
}
