//! Async runtime that paces and serializes a two-combatant battle.
//!
//! This crate wires the pure rules of `battle-core` into a tokio worker task
//! that owns the authoritative battle. Consumers embed [`Runtime`] to start
//! the worker, submit moves and subscribe to events through [`BattleHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] adapts static content and randomness for the worker
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{BattleHandle, Result, RuntimeError};
pub use events::{BattleEvent, Event, EventBus, PresentationEvent, Topic};
pub use oracle::{BattleOracle, StdRandom};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use workers::Pacing;
