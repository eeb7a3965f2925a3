//! Worker tasks that back the runtime orchestration.
//!
//! The battle worker owns the authoritative battle and is the only place
//! where moves are resolved.

mod battle;

pub use battle::{BattleWorker, Command, Pacing};
