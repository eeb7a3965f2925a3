//! Move catalog.
//!
//! Every move known to the default content, keyed by name. Rosters pick their
//! move sets from here.

use battle_core::{ElementType, Move};

pub const EMBER_LASH: &str = "Ember Lash";
pub const QUICK_STRIKE: &str = "Quick Strike";
pub const SCORCH_BURST: &str = "Scorch Burst";
pub const VINE_WHIP: &str = "Vine Whip";
pub const TIDE_SLAM: &str = "Tide Slam";
pub const MUD_CRASH: &str = "Mud Crash";
pub const BODY_CHECK: &str = "Body Check";
pub const RIPTIDE: &str = "Riptide";

/// Name-indexed collection of move definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<Move>,
}

impl MoveCatalog {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// The catalog shipped with the default battle.
    pub fn standard() -> Self {
        Self::new(vec![
            Move::new(EMBER_LASH, ElementType::Fire, 40)
                .with_description("A whip of flame that licks at the target."),
            Move::new(QUICK_STRIKE, ElementType::Normal, 35)
                .with_description("A fast, plain blow."),
            Move::new(SCORCH_BURST, ElementType::Fire, 60)
                .with_accuracy(90)
                .with_description("A burst of searing heat."),
            Move::new(VINE_WHIP, ElementType::Grass, 40)
                .with_description("Lashes the target with thorny vines."),
            Move::new(TIDE_SLAM, ElementType::Water, 45)
                .with_description("Crashes into the target like a breaking wave."),
            Move::new(MUD_CRASH, ElementType::Ground, 50)
                .with_description("Hurls a wall of wet earth."),
            Move::new(BODY_CHECK, ElementType::Normal, 35)
                .with_description("Shoulders the target off balance."),
            Move::new(RIPTIDE, ElementType::Water, 60)
                .with_accuracy(85)
                .with_description("Drags the target under a churning current."),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    /// Clones the named moves in order, skipping names the catalog lacks.
    pub fn pick(&self, names: &[&str]) -> Vec<Move> {
        names
            .iter()
            .filter_map(|name| self.get(name).cloned())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
