#![allow(dead_code)]

use battle_core::{
    BattleConfig, BattleSetup, BattleState, CombatantTemplate, ElementType, Move, TypeChart,
};

pub fn player() -> CombatantTemplate {
    CombatantTemplate::new("Cinderpaw", vec![ElementType::Fire], 220)
        .with_energy(100)
        .with_moves([
            Move::new("Ember Lash", ElementType::Fire, 40),
            Move::new("Quick Strike", ElementType::Normal, 35),
            Move::new("Verdant Crush", ElementType::Grass, 120),
            Move::new("Drizzle", ElementType::Water, 10),
        ])
}

pub fn opponent() -> CombatantTemplate {
    CombatantTemplate::new("Tidemaw", vec![ElementType::Water, ElementType::Ground], 260)
        .with_moves([
            Move::new("Tide Slam", ElementType::Water, 45),
            Move::new("Drizzle", ElementType::Water, 10),
        ])
}

pub fn setup() -> BattleSetup {
    BattleSetup::new(player(), opponent())
}

pub fn fresh_state() -> BattleState {
    BattleState::new(&setup()).expect("test setup is valid")
}

pub struct Fixture {
    pub chart: TypeChart,
    pub config: BattleConfig,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            chart: TypeChart::standard(),
            config: BattleConfig::default(),
        }
    }

    pub fn env(&self) -> battle_core::BattleEnv<'_> {
        battle_core::BattleEnv::new(&self.chart, &self.config)
    }
}
