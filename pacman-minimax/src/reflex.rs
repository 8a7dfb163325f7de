use decorum::N64;
use derivative::Derivative;
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    types::{GameAction, SearchableGame, PACMAN},
    InvalidAction, Scorable,
};

#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
/// Looks a single move ahead. Every legal move of Pacman is scored by applying it and handing
/// the resulting game to the score function. Nothing about the ghosts is simulated.
///
/// When several moves share the best score one of them is picked uniformly at random, using the
/// random number generator of the caller.
///
pub struct ReflexAgent<ScorableType> {
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
}

impl<ScorableType> ReflexAgent<ScorableType> {
    /// Construct a new `ReflexAgent` that scores successors with `score_function`.
    ///
    /// [crate::evaluation::reflex_evaluation] is the usual choice.
    pub fn new(score_function: ScorableType) -> Self {
        Self { score_function }
    }

    /// Pick Pacman's next move. [GameAction::STOP] when Pacman can not move at all
    pub fn choose_action<GameType, RngType>(
        &self,
        state: &GameType,
        rng: &mut RngType,
    ) -> Result<GameType::Action, InvalidAction>
    where
        GameType: SearchableGame,
        ScorableType: Scorable<GameType>,
        RngType: Rng + ?Sized,
    {
        let scored = state
            .legal_actions(PACMAN)
            .into_iter()
            .map(|action| {
                let successor = state.successor(PACMAN, action)?;
                Ok((action, N64::from(self.score_function.score(&successor))))
            })
            .collect::<Result<Vec<_>, InvalidAction>>()?;

        let best_score = match scored.iter().map(|(_, score)| *score).max() {
            Some(best_score) => best_score,
            None => return Ok(GameType::Action::STOP),
        };

        let tied = scored
            .into_iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| action)
            .collect_vec();
        debug!(ties = tied.len(), "reflex choice");

        Ok(tied.choose(rng).copied().unwrap_or(GameType::Action::STOP))
    }
}
