use crate::error::ConfigError;

/// Tunable half-open range `[low, high)` for the damage variation factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariationRange {
    pub low: f64,
    pub high: f64,
}

impl VariationRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Maps a unit sample in `[0, 1)` onto this range.
    pub fn sample(&self, unit: f64) -> f64 {
        self.low + unit * (self.high - self.low)
    }
}

impl Default for VariationRange {
    fn default() -> Self {
        Self::new(
            BattleConfig::DEFAULT_VARIATION_LOW,
            BattleConfig::DEFAULT_VARIATION_HIGH,
        )
    }
}

/// Battle rules constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Smallest damage a single hit may deal after rounding.
    pub min_damage: u32,
    /// Largest damage a single hit may deal after rounding.
    pub max_damage: u32,
    /// Probability in `[0, 1]` that a hit is critical.
    pub crit_chance: f64,
    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: f64,
    /// Range of the uniform damage variation factor.
    pub variation: VariationRange,
    /// Effectiveness strictly above this value is reported as super effective.
    pub super_effective_above: f64,
    /// Effectiveness strictly below this value is reported as not very effective.
    pub not_very_effective_below: f64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of lines the battle log retains.
    pub const LOG_CAPACITY: usize = 8;
    /// Maximum number of element types on one combatant.
    pub const MAX_TYPES: usize = 2;
    /// Maximum number of moves in one combatant's move set.
    pub const MAX_MOVES: usize = 4;
    /// Upper bound for move accuracy (percentage).
    pub const MAX_ACCURACY: u8 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_DAMAGE: u32 = 12;
    pub const DEFAULT_MAX_DAMAGE: u32 = 90;
    pub const DEFAULT_CRIT_CHANCE: f64 = 0.10;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_VARIATION_LOW: f64 = 0.85;
    pub const DEFAULT_VARIATION_HIGH: f64 = 1.05;
    pub const DEFAULT_SUPER_EFFECTIVE_ABOVE: f64 = 1.5;
    pub const DEFAULT_NOT_VERY_EFFECTIVE_BELOW: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            min_damage: Self::DEFAULT_MIN_DAMAGE,
            max_damage: Self::DEFAULT_MAX_DAMAGE,
            crit_chance: Self::DEFAULT_CRIT_CHANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            variation: VariationRange::default(),
            super_effective_above: Self::DEFAULT_SUPER_EFFECTIVE_ABOVE,
            not_very_effective_below: Self::DEFAULT_NOT_VERY_EFFECTIVE_BELOW,
        }
    }

    /// Checks that every tunable can produce a roll.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_damage > self.max_damage {
            return Err(ConfigError::InvertedDamageBounds {
                min: self.min_damage,
                max: self.max_damage,
            });
        }
        if !(0.0..=1.0).contains(&self.crit_chance) {
            return Err(ConfigError::CritChanceOutOfRange {
                chance: self.crit_chance,
            });
        }
        if !(self.crit_multiplier > 0.0) {
            return Err(ConfigError::NonPositiveCritMultiplier {
                multiplier: self.crit_multiplier,
            });
        }
        let VariationRange { low, high } = self.variation;
        if !(low > 0.0 && low <= high) {
            return Err(ConfigError::InvalidVariation { low, high });
        }
        Ok(())
    }

    /// Clamps a rounded damage value into `[min_damage, max_damage]`.
    ///
    /// Inverted bounds are swapped rather than trusted.
    pub fn clamp_damage(&self, raw: f64) -> u32 {
        let floor = self.min_damage.min(self.max_damage);
        let ceiling = self.min_damage.max(self.max_damage);
        let bounded = raw.clamp(f64::from(floor), f64::from(ceiling));
        bounded as u32
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_damage_respects_floor_and_ceiling() {
        let config = BattleConfig::default();
        assert_eq!(config.clamp_damage(0.0), 12);
        assert_eq!(config.clamp_damage(45.0), 45);
        assert_eq!(config.clamp_damage(10_000.0), 90);
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BattleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_damage_bounds_are_reported_and_never_panic() {
        let config = BattleConfig {
            min_damage: 90,
            max_damage: 12,
            ..BattleConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedDamageBounds { min: 90, max: 12 })
        );
        assert_eq!(config.clamp_damage(40.0), 40);
        assert_eq!(config.clamp_damage(500.0), 90);
    }

    #[test]
    fn out_of_range_probabilities_are_rejected() {
        let config = BattleConfig {
            crit_chance: 1.5,
            ..BattleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CritChanceOutOfRange { .. })
        ));

        let config = BattleConfig {
            variation: VariationRange::new(1.05, 0.85),
            ..BattleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVariation { .. })
        ));
    }

    #[test]
    fn variation_sample_maps_unit_interval() {
        let range = VariationRange::default();
        assert!((range.sample(0.0) - 0.85).abs() < 1e-12);
        assert!((range.sample(0.5) - 0.95).abs() < 1e-12);
        assert!(range.sample(0.999_999) < 1.05);
    }
}
