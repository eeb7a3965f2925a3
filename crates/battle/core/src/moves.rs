//! Static move definitions.

use crate::config::BattleConfig;
use crate::element::ElementType;
use crate::error::DefinitionError;

/// Immutable attack definition shared by every battle that uses it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    pub element: ElementType,
    /// Base damage scale.
    pub power: u32,
    /// Hit chance as a percentage. Stored for future hit checks; every move
    /// currently lands.
    pub accuracy: u8,
    pub description: String,
}

impl Move {
    /// Creates a move with 100 accuracy and no description.
    pub fn new(name: impl Into<String>, element: ElementType, power: u32) -> Self {
        Self {
            name: name.into(),
            element,
            power,
            accuracy: BattleConfig::MAX_ACCURACY,
            description: String::new(),
        }
    }

    /// Sets the accuracy (builder pattern).
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the descriptive text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.power == 0 {
            return Err(DefinitionError::ZeroPower {
                name: self.name.clone(),
            });
        }
        if self.accuracy > BattleConfig::MAX_ACCURACY {
            return Err(DefinitionError::AccuracyOutOfRange {
                name: self.name.clone(),
                accuracy: self.accuracy,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let mv = Move::new("Ember Lash", ElementType::Fire, 40)
            .with_accuracy(95)
            .with_description("A whip of flame.");
        assert_eq!(mv.accuracy, 95);
        assert_eq!(mv.description, "A whip of flame.");
        assert!(mv.validate().is_ok());
    }

    #[test]
    fn zero_power_is_rejected() {
        let err = Move::new("Nothing", ElementType::Normal, 0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::ZeroPower {
                name: "Nothing".into()
            }
        );
    }

    #[test]
    fn accuracy_above_hundred_is_rejected() {
        let err = Move::new("Wild Swing", ElementType::Normal, 30)
            .with_accuracy(101)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::AccuracyOutOfRange { accuracy: 101, .. }
        ));
    }
}
