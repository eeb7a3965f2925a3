//! Type effectiveness lookup.

use crate::element::ElementType;

/// Attack-type × defender-type multiplier lookup.
///
/// Implementations must be pure: the same pair always yields the same
/// positive multiplier.
pub trait EffectivenessTable: Send + Sync {
    /// Multiplier for `attack` hitting a single `defender` type.
    fn multiplier(&self, attack: ElementType, defender: ElementType) -> f64;

    /// Multiplier against a defender with several types: the product of the
    /// per-type lookups.
    fn against(&self, attack: ElementType, defender_types: &[ElementType]) -> f64 {
        defender_types
            .iter()
            .map(|&defender| self.multiplier(attack, defender))
            .product()
    }
}

/// Sparse effectiveness chart; pairs without an entry are neutral (1.0).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeChart {
    entries: Vec<(ElementType, ElementType, f64)>,
}

impl TypeChart {
    pub const SUPER: f64 = 2.0;
    pub const RESISTED: f64 = 0.5;

    /// A chart with no entries; every lookup is neutral.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets the multiplier for one pair, replacing an existing entry.
    #[must_use]
    pub fn with_entry(mut self, attack: ElementType, defender: ElementType, value: f64) -> Self {
        self.set(attack, defender, value);
        self
    }

    pub fn set(&mut self, attack: ElementType, defender: ElementType, value: f64) {
        match self
            .entries
            .iter_mut()
            .find(|(a, d, _)| *a == attack && *d == defender)
        {
            Some(entry) => entry.2 = value,
            None => self.entries.push((attack, defender, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The chart used by the default battle content.
    pub fn standard() -> Self {
        use ElementType::*;

        const CHART: &[(ElementType, &[ElementType], &[ElementType])] = &[
            (Fire, &[Grass, Ice], &[Fire, Water]),
            (Water, &[Fire, Ground], &[Water, Grass]),
            (Grass, &[Water, Ground], &[Fire, Grass, Flying]),
            (Electric, &[Water, Flying], &[Electric, Grass, Ground]),
            (Ice, &[Grass, Ground, Flying], &[Fire, Water, Ice]),
            (Ground, &[Fire, Electric], &[Grass, Flying]),
            (Flying, &[Grass], &[Electric]),
        ];

        let mut chart = Self::empty();
        for (attack, strong_against, weak_against) in CHART {
            for &defender in *strong_against {
                chart.set(*attack, defender, Self::SUPER);
            }
            for &defender in *weak_against {
                chart.set(*attack, defender, Self::RESISTED);
            }
        }
        chart
    }
}

impl EffectivenessTable for TypeChart {
    fn multiplier(&self, attack: ElementType, defender: ElementType) -> f64 {
        self.entries
            .iter()
            .find(|(a, d, _)| *a == attack && *d == defender)
            .map_or(1.0, |(_, _, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn missing_entries_are_neutral() {
        let chart = TypeChart::empty();
        assert_eq!(chart.multiplier(ElementType::Fire, ElementType::Grass), 1.0);
        assert_eq!(chart.against(ElementType::Fire, &[]), 1.0);
    }

    #[test]
    fn standard_chart_entries() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(ElementType::Fire, ElementType::Grass), 2.0);
        assert_eq!(chart.multiplier(ElementType::Water, ElementType::Grass), 0.5);
        assert_eq!(chart.multiplier(ElementType::Normal, ElementType::Flying), 1.0);
    }

    #[test]
    fn dual_type_multiplies_rather_than_adds() {
        let chart = TypeChart::standard();
        // Grass is 2x against both Water and Ground.
        let both = chart.against(ElementType::Grass, &[ElementType::Water, ElementType::Ground]);
        assert_eq!(both, 4.0);
        // 2x and 0.5x cancel out.
        let mixed = chart.against(ElementType::Fire, &[ElementType::Grass, ElementType::Water]);
        assert_eq!(mixed, 1.0);
    }

    #[test]
    fn every_standard_multiplier_is_positive() {
        let chart = TypeChart::standard();
        for attack in ElementType::iter() {
            for defender in ElementType::iter() {
                assert!(chart.multiplier(attack, defender) > 0.0);
            }
        }
    }

    #[test]
    fn with_entry_overrides_existing_value() {
        let chart = TypeChart::standard().with_entry(ElementType::Fire, ElementType::Grass, 3.0);
        assert_eq!(chart.multiplier(ElementType::Fire, ElementType::Grass), 3.0);
        assert_eq!(chart.len(), TypeChart::standard().len());
    }
}
