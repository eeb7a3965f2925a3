//! Common error infrastructure for battle-core.
//!
//! Rules never fail in the domain sense: all inputs come from validated static
//! data. The failure-like conditions are:
//!
//! - [`SubmitError`]: a move submission the state machine refuses (a no-op)
//! - [`StaleResolution`]: a pending resolution that no longer matches the battle
//! - [`DefinitionError`]: malformed static data, caught when a battle is built
//! - [`ConfigError`]: inconsistent [`crate::BattleConfig`] tunables

use crate::element::ElementType;
use crate::state::Side;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    ///
    /// Examples: resolution in flight, wrong turn
    Recoverable,

    /// Invalid input that should not be retried without changes.
    ///
    /// Examples: battle concluded, unknown move, malformed template
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all battle-core errors.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Reason a move submission was ignored.
///
/// A rejected submission never mutates the battle state or the battle log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmitError {
    #[error("battle already concluded; {victor} won")]
    BattleConcluded { victor: Side },

    #[error("a resolution is already in flight")]
    ResolutionInFlight,

    #[error("{side} cannot act with 0 health")]
    AttackerFainted { side: Side },

    #[error("it is {expected}'s turn, not {side}'s")]
    WrongTurn { side: Side, expected: Side },

    #[error("{side} has no move named '{name}'")]
    UnknownMove { side: Side, name: String },
}

impl BattleError for SubmitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ResolutionInFlight | Self::WrongTurn { .. } => ErrorSeverity::Recoverable,
            Self::BattleConcluded { .. }
            | Self::AttackerFainted { .. }
            | Self::UnknownMove { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleConcluded { .. } => "battle_concluded",
            Self::ResolutionInFlight => "resolution_in_flight",
            Self::AttackerFainted { .. } => "attacker_fainted",
            Self::WrongTurn { .. } => "wrong_turn",
            Self::UnknownMove { .. } => "unknown_move",
        }
    }
}

/// A pending resolution was discarded because the battle moved on.
///
/// Raised when a reset replaced the battle between submission and
/// resolution, or when the pending step was already applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "stale resolution for epoch {pending_epoch} nonce {pending_nonce} \
     (battle is at epoch {current_epoch} nonce {current_nonce})"
)]
pub struct StaleResolution {
    pub pending_epoch: u64,
    pub pending_nonce: u64,
    pub current_epoch: u64,
    pub current_nonce: u64,
}

impl BattleError for StaleResolution {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "stale_resolution"
    }
}

/// Malformed static battle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefinitionError {
    #[error("move '{name}' must have positive power")]
    ZeroPower { name: String },

    #[error("move '{name}' has accuracy {accuracy}, expected 0..=100")]
    AccuracyOutOfRange { name: String, accuracy: u8 },

    #[error("combatant '{name}' must have at least one element type")]
    NoTypes { name: String },

    #[error("combatant '{name}' has {count} element types, at most {max} allowed")]
    TooManyTypes {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("combatant '{name}' lists element type {element} twice")]
    DuplicateType { name: String, element: ElementType },

    #[error("combatant '{name}' must have positive max health")]
    ZeroMaxHealth { name: String },

    #[error("combatant '{name}' must know at least one move")]
    EmptyMoveSet { name: String },

    #[error("combatant '{name}' knows {count} moves, at most {max} allowed")]
    TooManyMoves {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("combatant '{name}' knows move '{move_name}' twice")]
    DuplicateMove { name: String, move_name: String },
}

impl BattleError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroPower { .. } => "zero_power",
            Self::AccuracyOutOfRange { .. } => "accuracy_out_of_range",
            Self::NoTypes { .. } => "no_types",
            Self::TooManyTypes { .. } => "too_many_types",
            Self::DuplicateType { .. } => "duplicate_type",
            Self::ZeroMaxHealth { .. } => "zero_max_health",
            Self::EmptyMoveSet { .. } => "empty_move_set",
            Self::TooManyMoves { .. } => "too_many_moves",
            Self::DuplicateMove { .. } => "duplicate_move",
        }
    }
}

/// Battle tunables that cannot produce a valid roll.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("damage floor {min} exceeds ceiling {max}")]
    InvertedDamageBounds { min: u32, max: u32 },

    #[error("critical chance {chance} is outside [0, 1]")]
    CritChanceOutOfRange { chance: f64 },

    #[error("critical multiplier {multiplier} must be positive")]
    NonPositiveCritMultiplier { multiplier: f64 },

    #[error("variation range [{low}, {high}) is empty or not positive")]
    InvalidVariation { low: f64, high: f64 },
}

impl BattleError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvertedDamageBounds { .. } => "inverted_damage_bounds",
            Self::CritChanceOutOfRange { .. } => "crit_chance_out_of_range",
            Self::NonPositiveCritMultiplier { .. } => "non_positive_crit_multiplier",
            Self::InvalidVariation { .. } => "invalid_variation",
        }
    }
}
