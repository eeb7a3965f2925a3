//! Combatant roster and the default battle setup.

use battle_core::{BattleSetup, CombatantTemplate, ElementType, Side};

use crate::catalog::{self, MoveCatalog};

/// The player's combatant: a Fire type with a Grass coverage move.
pub fn cinderpaw() -> CombatantTemplate {
    let moves = MoveCatalog::standard().pick(&[
        catalog::EMBER_LASH,
        catalog::QUICK_STRIKE,
        catalog::SCORCH_BURST,
        catalog::VINE_WHIP,
    ]);
    CombatantTemplate::new("Cinderpaw", vec![ElementType::Fire], 220)
        .with_energy(100)
        .with_moves(moves)
}

/// The automated opponent: a Water/Ground dual type.
pub fn tidemaw() -> CombatantTemplate {
    let moves = MoveCatalog::standard().pick(&[
        catalog::TIDE_SLAM,
        catalog::MUD_CRASH,
        catalog::BODY_CHECK,
        catalog::RIPTIDE,
    ]);
    CombatantTemplate::new("Tidemaw", vec![ElementType::Water, ElementType::Ground], 260)
        .with_energy(100)
        .with_moves(moves)
}

/// Cinderpaw against Tidemaw, player first.
pub fn default_setup() -> BattleSetup {
    BattleSetup::new(cinderpaw(), tidemaw()).with_first_turn(Side::Player)
}
