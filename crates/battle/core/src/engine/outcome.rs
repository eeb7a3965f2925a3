use crate::combat::{DamageRoll, EffectivenessTier};
use crate::element::ElementType;
use crate::moves::Move;
use crate::state::Side;

/// An accepted submission waiting to be applied.
///
/// Carries the epoch and nonce the battle had when the move was accepted;
/// [`super::BattleEngine::resolve`] refuses it once either has moved on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingResolution {
    pub epoch: u64,
    pub nonce: u64,
    pub attacker: Side,
    pub mv: Move,
}

impl PendingResolution {
    pub fn defender(&self) -> Side {
        self.attacker.other()
    }
}

/// Everything one resolved move changed, plus what to tell the player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub attacker: Side,
    /// The struck side; hit reactions are keyed by it.
    pub defender: Side,
    pub attacker_name: String,
    pub defender_name: String,
    pub move_name: String,
    pub element: ElementType,
    pub roll: DamageRoll,
    pub tier: EffectivenessTier,
    pub defender_health: u32,
    pub victor: Option<Side>,
}

impl TurnOutcome {
    pub fn fainted(&self) -> bool {
        self.defender_health == 0
    }

    /// Log lines for this turn, oldest first.
    pub fn messages(&self) -> Vec<String> {
        let mut lines = vec![format!("{} used {}!", self.attacker_name, self.move_name)];
        if self.roll.critical {
            lines.push("A critical hit!".to_owned());
        }
        if let Some(line) = self.tier.message() {
            lines.push(line.to_owned());
        }
        if self.fainted() {
            lines.push(format!("{} fainted.", self.defender_name));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(critical: bool, tier: EffectivenessTier, health: u32) -> TurnOutcome {
        TurnOutcome {
            attacker: Side::Player,
            defender: Side::Opponent,
            attacker_name: "Cinderpaw".into(),
            defender_name: "Tidemaw".into(),
            move_name: "Vine Whip".into(),
            element: ElementType::Grass,
            roll: DamageRoll {
                damage: 90,
                effectiveness: 4.0,
                critical,
            },
            tier,
            defender_health: health,
            victor: (health == 0).then_some(Side::Player),
        }
    }

    #[test]
    fn plain_hit_has_single_line() {
        let lines = outcome(false, EffectivenessTier::Neutral, 100).messages();
        assert_eq!(lines, ["Cinderpaw used Vine Whip!"]);
    }

    #[test]
    fn lines_follow_announcement_crit_effectiveness_faint_order() {
        let lines = outcome(true, EffectivenessTier::SuperEffective, 0).messages();
        assert_eq!(
            lines,
            [
                "Cinderpaw used Vine Whip!",
                "A critical hit!",
                "It's super effective!",
                "Tidemaw fainted.",
            ]
        );
    }
}
