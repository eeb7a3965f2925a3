#![allow(dead_code)]

use std::time::Duration;

use battle_core::FixedRolls;
use battle_runtime::{BattleEvent, Event, Runtime, RuntimeConfig};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; `RUST_LOG=runtime::worker=debug` shows the worker.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Both sides driven by the test.
pub fn manual_config() -> RuntimeConfig {
    RuntimeConfig {
        automated_side: None,
        seed: Some(7),
        ..RuntimeConfig::default()
    }
}

/// Opponent driven by the runtime.
pub fn automated_config() -> RuntimeConfig {
    RuntimeConfig {
        seed: Some(7),
        ..RuntimeConfig::default()
    }
}

/// Starts the default battle with neutral, crit-free rolls.
pub async fn start(config: RuntimeConfig) -> Runtime {
    init_tracing();
    Runtime::builder()
        .config(config)
        .random_source(FixedRolls::neutral())
        .build()
        .await
        .expect("runtime builds")
}

pub async fn next_battle_event(rx: &mut broadcast::Receiver<Event>) -> BattleEvent {
    let wait = async {
        loop {
            if let Event::Battle(event) = rx.recv().await.expect("event bus open") {
                return event;
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(30), wait)
        .await
        .expect("battle event within timeout")
}

/// Skips battle events until one matches.
pub async fn wait_for(
    rx: &mut broadcast::Receiver<Event>,
    matches: impl Fn(&BattleEvent) -> bool,
) -> BattleEvent {
    loop {
        let event = next_battle_event(rx).await;
        if matches(&event) {
            return event;
        }
    }
}

/// Everything already buffered on the receiver.
pub fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
