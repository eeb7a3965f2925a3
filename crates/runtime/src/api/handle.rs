//! Cloneable façade for issuing commands to the runtime.
//!
//! [`BattleHandle`] hides channel plumbing and offers async helpers for
//! submitting moves, resetting the battle or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{BattleState, PendingResolution, Side};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct BattleHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl BattleHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Submit a move for `side`.
    ///
    /// On acceptance the battle is busy until the attack and recovery delays
    /// have elapsed. A refused submission returns [`RuntimeError::Rejected`]
    /// and changes nothing.
    pub async fn submit_move(
        &self,
        side: Side,
        move_name: impl Into<String>,
    ) -> Result<PendingResolution> {
        let move_name = move_name.into();
        self.request(|reply| Command::SubmitMove {
            side,
            move_name,
            reply,
        })
        .await?
    }

    /// Replace the battle with a fresh one and cancel any pending step.
    ///
    /// Returns the new state.
    pub async fn reset_battle(&self) -> Result<BattleState> {
        self.request(|reply| Command::ResetBattle { reply }).await?
    }

    /// Query the current battle state (read-only snapshot)
    pub async fn query_state(&self) -> Result<BattleState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Battle log entries, most recent first.
    pub async fn query_log(&self) -> Result<Vec<String>> {
        self.request(|reply| Command::QueryLog { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Battle` - Accepted, resolved, concluded, turn-ready, reset and rejected submissions
    /// - `Topic::Presentation` - Move-cast and hit-reaction cues
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use battle_runtime::Topic;
    ///
    /// let mut battle_rx = handle.subscribe(Topic::Battle);
    /// while let Ok(event) = battle_rx.recv().await {
    ///     // Handle battle events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
