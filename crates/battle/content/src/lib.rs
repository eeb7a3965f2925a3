//! Static battle content and loaders.
//!
//! This crate houses the data a battle is built from:
//! - The move catalog
//! - The combatant roster and the default battle setup
//! - RON loaders for setups and effectiveness charts (`loaders` feature)
//!
//! Content is consumed when a battle is (re)started and never changes during
//! one.

pub mod catalog;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::MoveCatalog;
pub use roster::{cinderpaw, default_setup, tidemaw};

#[cfg(feature = "loaders")]
pub use loaders::{ChartLoader, SetupLoader};
