use crate::config::BattleConfig;

/// Messaging tier for an effectiveness multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectivenessTier {
    /// Effectiveness above the super-effective threshold (1.5).
    SuperEffective,
    /// Effectiveness in `[1.0, 1.5]`; no message.
    Neutral,
    /// Effectiveness below 1.0.
    NotVeryEffective,
}

impl EffectivenessTier {
    pub fn classify(effectiveness: f64, config: &BattleConfig) -> Self {
        if effectiveness > config.super_effective_above {
            Self::SuperEffective
        } else if effectiveness < config.not_very_effective_below {
            Self::NotVeryEffective
        } else {
            Self::Neutral
        }
    }

    /// Log line for this tier, if any.
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::SuperEffective => Some("It's super effective!"),
            Self::NotVeryEffective => Some("It's not very effective…"),
            Self::Neutral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        let config = BattleConfig::default();
        assert_eq!(EffectivenessTier::classify(1.5, &config), EffectivenessTier::Neutral);
        assert_eq!(EffectivenessTier::classify(1.0, &config), EffectivenessTier::Neutral);
        assert_eq!(EffectivenessTier::classify(1.51, &config), EffectivenessTier::SuperEffective);
        assert_eq!(EffectivenessTier::classify(0.99, &config), EffectivenessTier::NotVeryEffective);
        assert_eq!(EffectivenessTier::classify(4.0, &config), EffectivenessTier::SuperEffective);
        assert_eq!(EffectivenessTier::classify(0.25, &config), EffectivenessTier::NotVeryEffective);
    }

    #[test]
    fn neutral_has_no_message() {
        assert!(EffectivenessTier::Neutral.message().is_none());
        assert_eq!(
            EffectivenessTier::SuperEffective.message(),
            Some("It's super effective!")
        );
    }
}
