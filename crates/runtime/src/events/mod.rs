//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. The `Battle` topic carries the read model after each
//! resolution step; the `Presentation` topic carries timing cues for visuals.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleEvent, PresentationEvent};
