use crate::config::BattleConfig;
use crate::element::ElementType;
use crate::error::DefinitionError;
use crate::moves::Move;

/// Current/maximum pair for a bounded resource (health, energy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Lowers the current value by `amount`, floored at 0. Returns the new value.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount).min(self.maximum);
        self.current
    }
}

/// Static definition a combatant is spawned from at battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantTemplate {
    pub name: String,
    pub types: Vec<ElementType>,
    pub max_health: u32,
    /// Secondary resource. Reserved for future move costs.
    pub max_energy: u32,
    pub moves: Vec<Move>,
}

impl CombatantTemplate {
    pub fn new(name: impl Into<String>, types: Vec<ElementType>, max_health: u32) -> Self {
        Self {
            name: name.into(),
            types,
            max_health,
            max_energy: 0,
            moves: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_energy(mut self, max_energy: u32) -> Self {
        self.max_energy = max_energy;
        self
    }

    #[must_use]
    pub fn with_move(mut self, mv: Move) -> Self {
        self.moves.push(mv);
        self
    }

    #[must_use]
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves.extend(moves);
        self
    }

    /// Checks the template against the structural rules of a combatant.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let name = || self.name.clone();

        if self.types.is_empty() {
            return Err(DefinitionError::NoTypes { name: name() });
        }
        if self.types.len() > BattleConfig::MAX_TYPES {
            return Err(DefinitionError::TooManyTypes {
                name: name(),
                count: self.types.len(),
                max: BattleConfig::MAX_TYPES,
            });
        }
        if let Some(element) = first_duplicate(&self.types, |t| *t) {
            return Err(DefinitionError::DuplicateType {
                name: name(),
                element,
            });
        }
        if self.max_health == 0 {
            return Err(DefinitionError::ZeroMaxHealth { name: name() });
        }
        if self.moves.is_empty() {
            return Err(DefinitionError::EmptyMoveSet { name: name() });
        }
        if self.moves.len() > BattleConfig::MAX_MOVES {
            return Err(DefinitionError::TooManyMoves {
                name: name(),
                count: self.moves.len(),
                max: BattleConfig::MAX_MOVES,
            });
        }
        for mv in &self.moves {
            mv.validate()?;
        }
        if let Some(move_name) = first_duplicate(&self.moves, |m| m.name.clone()) {
            return Err(DefinitionError::DuplicateMove {
                name: name(),
                move_name,
            });
        }
        Ok(())
    }
}

fn first_duplicate<T, K: PartialEq>(items: &[T], key: impl Fn(&T) -> K) -> Option<K> {
    items.iter().enumerate().find_map(|(i, item)| {
        let k = key(item);
        items[..i].iter().any(|prev| key(prev) == k).then_some(k)
    })
}

/// In-battle instance of a combatant.
///
/// Health is only changed by the battle engine; everything else is fixed
/// for the lifetime of the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    health: ResourceMeter,
    energy: ResourceMeter,
    types: Vec<ElementType>,
    moves: Vec<Move>,
}

impl Combatant {
    /// Spawns a combatant at full health and energy.
    pub fn from_template(template: &CombatantTemplate) -> Self {
        Self {
            name: template.name.clone(),
            health: ResourceMeter::full(template.max_health),
            energy: ResourceMeter::full(template.max_energy),
            types: template.types.clone(),
            moves: template.moves.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health.current
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum
    }

    pub fn energy(&self) -> ResourceMeter {
        self.energy
    }

    pub fn types(&self) -> &[ElementType] {
        &self.types
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    pub fn is_fainted(&self) -> bool {
        self.health.is_depleted()
    }

    /// Applies resolved damage; health stays within `[0, max_health]`.
    pub(crate) fn take_damage(&mut self, damage: u32) -> u32 {
        self.health.deplete(damage)
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: u32) {
        self.health = ResourceMeter::new(health, self.health.maximum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> CombatantTemplate {
        CombatantTemplate::new("Cinderpaw", vec![ElementType::Fire], 220)
            .with_energy(100)
            .with_move(Move::new("Ember Lash", ElementType::Fire, 40))
            .with_move(Move::new("Quick Strike", ElementType::Normal, 35))
    }

    #[test]
    fn spawns_at_full_health() {
        let combatant = Combatant::from_template(&template());
        assert_eq!(combatant.health(), 220);
        assert_eq!(combatant.max_health(), 220);
        assert_eq!(combatant.energy(), ResourceMeter::full(100));
        assert!(combatant.find_move("Quick Strike").is_some());
        assert!(combatant.find_move("Tackle").is_none());
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut combatant = Combatant::from_template(&template());
        assert_eq!(combatant.take_damage(90), 130);
        assert_eq!(combatant.take_damage(500), 0);
        assert!(combatant.is_fainted());
    }

    #[test]
    fn valid_template_passes() {
        assert_eq!(template().validate(), Ok(()));
    }

    #[test]
    fn duplicate_move_names_are_rejected() {
        let tpl = template().with_move(Move::new("Ember Lash", ElementType::Fire, 50));
        assert_eq!(
            tpl.validate(),
            Err(DefinitionError::DuplicateMove {
                name: "Cinderpaw".into(),
                move_name: "Ember Lash".into(),
            })
        );
    }

    #[test]
    fn structural_limits_are_enforced() {
        let no_types = CombatantTemplate::new("Blank", vec![], 10)
            .with_move(Move::new("Poke", ElementType::Normal, 10));
        assert!(matches!(no_types.validate(), Err(DefinitionError::NoTypes { .. })));

        let three_types = CombatantTemplate::new(
            "Chimera",
            vec![ElementType::Fire, ElementType::Ice, ElementType::Water],
            10,
        )
        .with_move(Move::new("Poke", ElementType::Normal, 10));
        assert!(matches!(
            three_types.validate(),
            Err(DefinitionError::TooManyTypes { count: 3, .. })
        ));

        let no_moves = CombatantTemplate::new("Idle", vec![ElementType::Normal], 10);
        assert!(matches!(no_moves.validate(), Err(DefinitionError::EmptyMoveSet { .. })));

        let no_health = CombatantTemplate::new("Ghost", vec![ElementType::Normal], 0)
            .with_move(Move::new("Poke", ElementType::Normal, 10));
        assert!(matches!(no_health.validate(), Err(DefinitionError::ZeroMaxHealth { .. })));
    }
}
