//! Move selection for the automated side.

use crate::env::RandomSource;
use crate::moves::Move;
use crate::state::Combatant;

/// Chooses which move an automated combatant uses on its turn.
///
/// Policies are pure decision functions. Whether and when they are consulted
/// is up to the caller; the chosen move still goes through
/// [`crate::BattleEngine::submit`] like any other submission.
pub trait OpponentPolicy: Send + Sync {
    fn choose_move<'c>(
        &self,
        combatant: &'c Combatant,
        rng: &mut dyn RandomSource,
    ) -> Option<&'c Move>;
}

/// Picks uniformly among the combatant's moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformPolicy;

impl OpponentPolicy for UniformPolicy {
    fn choose_move<'c>(
        &self,
        combatant: &'c Combatant,
        rng: &mut dyn RandomSource,
    ) -> Option<&'c Move> {
        let moves = combatant.moves();
        if moves.is_empty() {
            return None;
        }
        moves.get(rng.choose_index(moves.len()))
    }
}
