//! High-level runtime orchestrator.
//!
//! The runtime owns the battle worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the battle.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use battle_core::{
    BattleConfig, BattleSetup, BattleState, EffectivenessTable, OpponentPolicy, RandomSource, Side,
    TypeChart, UniformPolicy,
};

use crate::api::{BattleHandle, Result, RuntimeError};
use crate::events::EventBus;
use crate::oracle::{BattleOracle, StdRandom};
use crate::workers::{BattleWorker, Command, Pacing};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Delay between accepting a move and applying its outcome.
    pub attack_delay: Duration,
    /// Delay between applying an outcome and accepting the next move.
    pub recovery_delay: Duration,
    /// Delay before the automated side submits once its turn begins.
    pub opponent_delay: Duration,
    /// Side whose moves the runtime chooses itself (`None` = both manual).
    pub automated_side: Option<Side>,
    /// Seed for the default random source; OS entropy when unset.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            attack_delay: Duration::from_millis(450),
            recovery_delay: Duration::from_millis(350),
            opponent_delay: Duration::from_millis(700),
            automated_side: Some(Side::Opponent),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_ATTACK_DELAY_MS` - Attack travel time (default: 450)
    /// - `BATTLE_RECOVERY_DELAY_MS` - Recovery time (default: 350)
    /// - `BATTLE_OPPONENT_DELAY_MS` - Automated side think time (default: 700)
    /// - `BATTLE_AUTOMATED_SIDE` - `player`, `opponent` or `none` (default: opponent)
    /// - `BATTLE_SEED` - Random seed (default: OS entropy)
    /// - `BATTLE_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `BATTLE_EVENT_BUFFER` - Per-topic event buffer (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("BATTLE_ATTACK_DELAY_MS") {
            config.attack_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("BATTLE_RECOVERY_DELAY_MS") {
            config.recovery_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("BATTLE_OPPONENT_DELAY_MS") {
            config.opponent_delay = Duration::from_millis(ms);
        }
        if let Some(side) = env::var("BATTLE_AUTOMATED_SIDE")
            .ok()
            .and_then(|value| parse_automated_side(&value))
        {
            config.automated_side = side;
        }
        if let Some(seed) = read_env::<u64>("BATTLE_SEED") {
            config.seed = Some(seed);
        }
        if let Some(capacity) = read_env::<usize>("BATTLE_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("BATTLE_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub(crate) fn pacing(&self) -> Pacing {
        Pacing {
            attack_delay: self.attack_delay,
            recovery_delay: self.recovery_delay,
            opponent_delay: self.opponent_delay,
            automated_side: self.automated_side,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// `none` disables automation; anything else must name a side.
fn parse_automated_side(value: &str) -> Option<Option<Side>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    value.parse::<Side>().ok().map(Some)
}

/// Main runtime that hosts the battle worker
///
/// Design: Runtime owns the worker task.
/// [`BattleHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: BattleHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> BattleHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    setup: Option<BattleSetup>,
    table: Option<Arc<dyn EffectivenessTable>>,
    policy: Option<Arc<dyn OpponentPolicy>>,
    rng: Option<Box<dyn RandomSource>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            setup: None,
            table: None,
            policy: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Battle to run and to restore on reset (default: the bundled content)
    pub fn setup(mut self, setup: BattleSetup) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Effectiveness table (default: [`TypeChart::standard`])
    pub fn table(mut self, table: impl EffectivenessTable + 'static) -> Self {
        self.table = Some(Arc::new(table));
        self
    }

    /// Move selection for the automated side (default: [`UniformPolicy`])
    pub fn policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Some(Arc::new(policy));
        self
    }

    /// Random source for every roll (default: [`StdRandom`] from the config seed)
    pub fn random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        self.config
            .battle
            .validate()
            .map_err(RuntimeError::InvalidConfig)?;

        let setup = self.setup.unwrap_or_else(battle_content::default_setup);
        let state = BattleState::new(&setup).map_err(RuntimeError::InvalidSetup)?;

        let table = self
            .table
            .unwrap_or_else(|| Arc::new(TypeChart::standard()));
        let policy = self.policy.unwrap_or_else(|| Arc::new(UniformPolicy));
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(StdRandom::from_seed(self.config.seed)));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = BattleHandle::new(command_tx, event_bus.clone());

        let worker = BattleWorker::new(
            state,
            BattleOracle::new(setup, table, self.config.battle.clone()),
            rng,
            policy,
            self.config.pacing(),
            command_rx,
            event_bus,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_pacing() {
        let config = RuntimeConfig::default();
        assert_eq!(config.attack_delay, Duration::from_millis(450));
        assert_eq!(config.recovery_delay, Duration::from_millis(350));
        assert_eq!(config.opponent_delay, Duration::from_millis(700));
        assert_eq!(config.automated_side, Some(Side::Opponent));
        assert_eq!(config.command_buffer_size, 32);
        assert_eq!(config.event_buffer_size, 100);
    }

    #[test]
    fn automated_side_parsing() {
        assert_eq!(parse_automated_side("none"), Some(None));
        assert_eq!(parse_automated_side(" Player "), Some(Some(Side::Player)));
        assert_eq!(parse_automated_side("opponent"), Some(Some(Side::Opponent)));
        assert_eq!(parse_automated_side("referee"), None);
    }
}
