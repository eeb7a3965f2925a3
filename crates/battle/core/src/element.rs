//! Element types carried by moves (offensively) and combatants (defensively).

/// One of the eight element types.
///
/// A move has exactly one element; a combatant has one or two, which are
/// looked up against the attacking element when damage is resolved.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Ground,
    Flying,
}

impl ElementType {
    pub const COUNT: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("FIRE".parse::<ElementType>(), Ok(ElementType::Fire));
        assert_eq!("flying".parse::<ElementType>(), Ok(ElementType::Flying));
        assert!("shadow".parse::<ElementType>().is_err());
    }

    #[test]
    fn enumerates_all_eight_types() {
        assert_eq!(ElementType::iter().count(), ElementType::COUNT);
        assert_eq!(ElementType::Electric.to_string(), "electric");
    }
}
