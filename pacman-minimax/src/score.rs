use std::{fmt::Display, str::FromStr};

use crate::{
    evaluation::{better_evaluation, score_evaluation},
    types::{
        FoodGettableGame, GhostGettableGame, PacmanPositionGettableGame, SearchableGame,
        SizeDeterminableGame,
    },
    PlanError,
};

/// Scores are plain floats. Higher is better for Pacman
pub type Score = f64;

/// This trait is used to control something that can return a score from a game board
///
/// Any `Fn(&GameType) -> f64` is [Scorable], so closures and plain functions can be handed to
/// the search directly.
pub trait Scorable<GameType> {
    /// Convert the given GameType into a Score
    fn score(&self, game: &GameType) -> Score;
}

impl<GameType, FnLike: Fn(&GameType) -> Score> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> Score {
        (self)(game)
    }
}

/// The built in evaluation functions, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    /// The game score, untouched. See [score_evaluation]
    #[default]
    Score,
    /// The food, capsule and ghost heuristic. See [better_evaluation]
    Better,
}

impl<GameType> Scorable<GameType> for EvaluatorKind
where
    GameType: SearchableGame
        + PacmanPositionGettableGame
        + FoodGettableGame
        + GhostGettableGame
        + SizeDeterminableGame,
{
    fn score(&self, game: &GameType) -> Score {
        match self {
            EvaluatorKind::Score => score_evaluation(game),
            EvaluatorKind::Better => better_evaluation(game),
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" | "score-evaluation" => Ok(EvaluatorKind::Score),
            "better" | "better-evaluation" => Ok(EvaluatorKind::Better),
            other => Err(PlanError::UnknownEvaluator(other.to_owned())),
        }
    }
}

impl Display for EvaluatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluatorKind::Score => write!(f, "score"),
            EvaluatorKind::Better => write!(f, "better"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_names() {
        assert_eq!("score".parse::<EvaluatorKind>(), Ok(EvaluatorKind::Score));
        assert_eq!("better".parse::<EvaluatorKind>(), Ok(EvaluatorKind::Better));
        assert_eq!(
            "better-evaluation".parse::<EvaluatorKind>(),
            Ok(EvaluatorKind::Better)
        );
        assert_eq!(
            "clairvoyant".parse::<EvaluatorKind>(),
            Err(PlanError::UnknownEvaluator("clairvoyant".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips_names() {
        for kind in [EvaluatorKind::Score, EvaluatorKind::Better] {
            assert_eq!(kind.to_string().parse::<EvaluatorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_closures_are_scorable() {
        let double = |x: &i32| f64::from(*x) * 2.0;

        assert_eq!(double.score(&21), 42.0);
    }
}
