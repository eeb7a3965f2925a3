//! Damage calculation.

use crate::env::{BattleEnv, RandomSource};
use crate::moves::Move;
use crate::state::Combatant;

use super::effectiveness::EffectivenessTier;

/// Result of one damage roll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    /// Damage after rounding and clamping.
    pub damage: u32,
    /// Raw effectiveness multiplier; used for messaging only.
    pub effectiveness: f64,
    pub critical: bool,
}

impl DamageRoll {
    pub fn tier(&self, env: &BattleEnv<'_>) -> EffectivenessTier {
        EffectivenessTier::classify(self.effectiveness, env.config())
    }
}

/// Roll damage for `mv` against `defender`.
///
/// # Formula
///
/// ```text
/// variation     = uniform [0.85, 1.05)
/// critical      = chance 0.10
/// effectiveness = product of table lookups over the defender's types
/// raw           = round(power × variation × (1.5 if critical) × effectiveness)
/// damage        = clamp(raw, 12, 90)
/// ```
///
/// Bounds, chance and multipliers come from [`crate::BattleConfig`]. The
/// variation is drawn before the critical flag. Every move lands.
pub fn resolve<R: RandomSource + ?Sized>(
    mv: &Move,
    defender: &Combatant,
    env: &BattleEnv<'_>,
    rng: &mut R,
) -> DamageRoll {
    let config = env.config();

    let variation = rng.roll_variation(config.variation);
    let critical = rng.roll_critical(config.crit_chance);
    let effectiveness = env.tables().against(mv.element, defender.types());

    let crit_factor = if critical { config.crit_multiplier } else { 1.0 };
    let raw = (f64::from(mv.power) * variation * crit_factor * effectiveness).round();

    DamageRoll {
        damage: config.clamp_damage(raw),
        effectiveness,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::element::ElementType;
    use crate::env::{FixedRolls, TypeChart};
    use crate::state::CombatantTemplate;

    fn defender(types: Vec<ElementType>) -> Combatant {
        Combatant::from_template(
            &CombatantTemplate::new("Target", types, 260)
                .with_move(Move::new("Poke", ElementType::Normal, 10)),
        )
    }

    #[test]
    fn neutral_hit_uses_power() {
        let chart = TypeChart::standard();
        let config = BattleConfig::default();
        let env = BattleEnv::new(&chart, &config);
        let mv = Move::new("Quick Strike", ElementType::Normal, 40);

        let mut rolls = FixedRolls::neutral();
        let roll = resolve(&mv, &defender(vec![ElementType::Fire]), &env, &mut rolls);

        assert_eq!(roll.damage, 40);
        assert_eq!(roll.effectiveness, 1.0);
        assert!(!roll.critical);
    }

    #[test]
    fn critical_multiplies_by_one_and_a_half() {
        let chart = TypeChart::standard();
        let config = BattleConfig::default();
        let env = BattleEnv::new(&chart, &config);
        let mv = Move::new("Quick Strike", ElementType::Normal, 40);
        let mut rolls = FixedRolls::neutral().with_critical(true);

        let roll = resolve(&mv, &defender(vec![ElementType::Fire]), &env, &mut rolls);

        assert_eq!(roll.damage, 60);
        assert!(roll.critical);
    }

    #[test]
    fn damage_is_rounded_before_clamping() {
        let chart = TypeChart::empty();
        let config = BattleConfig::default();
        let env = BattleEnv::new(&chart, &config);
        // 33 × 0.95 = 31.35 → 31
        let mv = Move::new("Jab", ElementType::Normal, 33);
        let mut rolls = FixedRolls::neutral().with_variation(0.95);

        let roll = resolve(&mv, &defender(vec![ElementType::Normal]), &env, &mut rolls);

        assert_eq!(roll.damage, 31);
    }

    #[test]
    fn damage_clamps_to_floor_and_ceiling() {
        let chart = TypeChart::standard();
        let config = BattleConfig::default();
        let env = BattleEnv::new(&chart, &config);

        let weak = Move::new("Drizzle", ElementType::Water, 10);
        let mut rolls = FixedRolls::neutral();
        let resisted = resolve(&weak, &defender(vec![ElementType::Grass]), &env, &mut rolls);
        assert_eq!(resisted.damage, 12);
        assert_eq!(resisted.effectiveness, 0.5);

        let strong = Move::new("Verdant Crush", ElementType::Grass, 60);
        rolls = rolls.with_critical(true);
        let crushed = resolve(
            &strong,
            &defender(vec![ElementType::Water, ElementType::Ground]),
            &env,
            &mut rolls,
        );
        assert_eq!(crushed.damage, 90);
        // Raw effectiveness is reported unclamped.
        assert_eq!(crushed.effectiveness, 4.0);
    }
}
