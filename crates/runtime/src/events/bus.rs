//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{BattleEvent, PresentationEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle state transitions (accepted, resolved, concluded, reset, rejected)
    Battle,
    /// Presentation cues (move cast, hit reaction)
    Presentation,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Battle, Topic::Presentation];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Battle(BattleEvent),
    Presentation(PresentationEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Battle(_) => Topic::Battle,
            Event::Presentation(_) => Topic::Presentation,
        }
    }
}

impl From<BattleEvent> for Event {
    fn from(event: BattleEvent) -> Self {
        Event::Battle(event)
    }
}

impl From<PresentationEvent> for Event {
    fn from(event: PresentationEvent) -> Self {
        Event::Presentation(event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels for every topic exist from construction.
#[derive(Clone)]
pub struct EventBus {
    battle: broadcast::Sender<Event>,
    presentation: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            battle: broadcast::channel(capacity).0,
            presentation: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Battle => &self.battle,
            Topic::Presentation => &self.presentation,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.channel(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Number of live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channel(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::Side;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut battle_rx = bus.subscribe(Topic::Battle);
        let mut presentation_rx = bus.subscribe(Topic::Presentation);

        bus.publish(PresentationEvent::HitReaction {
            side: Side::Opponent,
        });
        bus.publish(BattleEvent::BattleReset { epoch: 1 });

        assert_eq!(
            battle_rx.recv().await.unwrap(),
            Event::Battle(BattleEvent::BattleReset { epoch: 1 })
        );
        assert_eq!(
            presentation_rx.recv().await.unwrap(),
            Event::Presentation(PresentationEvent::HitReaction {
                side: Side::Opponent
            })
        );
        assert!(battle_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(BattleEvent::BattleReset { epoch: 0 });
        assert_eq!(bus.subscriber_count(Topic::Battle), 0);

        let receivers = bus.subscribe_multiple(&Topic::ALL);
        assert_eq!(receivers.len(), 2);
        assert_eq!(bus.subscriber_count(Topic::Presentation), 1);
    }
}
