use std::{fmt::Display, str::FromStr};

use derivative::Derivative;

use crate::{EvaluatorKind, PlanError};

/// How many full rounds the search looks ahead when nothing else is configured
pub const DEFAULT_DEPTH: usize = 2;

/// What the search assumes about the ghosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Every ghost plays the move that is worst for Pacman
    Minimax,
    /// Same answer as [SearchMode::Minimax], skipping subtrees that can not change it
    AlphaBeta,
    /// Every ghost picks uniformly at random among its legal moves
    Expectimax,
}

impl SearchMode {
    /// Every mode, in the order they are usually introduced
    pub const ALL: [SearchMode; 3] = [
        SearchMode::Minimax,
        SearchMode::AlphaBeta,
        SearchMode::Expectimax,
    ];
}

impl FromStr for SearchMode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchMode::Minimax),
            "alpha-beta" | "alphabeta" => Ok(SearchMode::AlphaBeta),
            "expectimax" => Ok(SearchMode::Expectimax),
            other => Err(PlanError::UnknownMode(other.to_owned())),
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Minimax => write!(f, "minimax"),
            SearchMode::AlphaBeta => write!(f, "alpha-beta"),
            SearchMode::Expectimax => write!(f, "expectimax"),
        }
    }
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
/// The evaluation function and depth a search runs with.
///
/// One unit of depth is a full round: Pacman moves once, then every ghost moves once.
///
/// Plans are validated when they are built, so a search never starts with a depth it can not
/// honor.
///
/// ```
/// use pacman_minimax::{EvaluatorKind, PlanError, SearchPlan};
///
/// let plan = SearchPlan::from_names("better", "3").unwrap();
/// assert_eq!(plan.depth(), 3);
/// assert_eq!(*plan.score_function(), EvaluatorKind::Better);
///
/// assert_eq!(
///     SearchPlan::new(EvaluatorKind::Score, 0).unwrap_err(),
///     PlanError::NonPositiveDepth(0)
/// );
/// ```
pub struct SearchPlan<ScorableType> {
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    depth: usize,
}

impl<ScorableType> SearchPlan<ScorableType> {
    /// Build a plan searching `depth` full rounds, scoring leaves with `score_function`
    pub fn new(score_function: ScorableType, depth: usize) -> Result<Self, PlanError> {
        if depth == 0 {
            return Err(PlanError::NonPositiveDepth(0));
        }

        Ok(Self {
            score_function,
            depth,
        })
    }

    /// Build a plan without checking the depth. A depth of zero scores the root's successors
    /// directly, which is only interesting when testing the traversal
    #[cfg(test)]
    pub(crate) fn unchecked(score_function: ScorableType, depth: usize) -> Self {
        Self {
            score_function,
            depth,
        }
    }

    /// The number of full rounds to search
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The function used to score leaves
    pub fn score_function(&self) -> &ScorableType {
        &self.score_function
    }
}

impl SearchPlan<EvaluatorKind> {
    /// Build a plan from textual configuration, such as command line arguments.
    ///
    /// `evaluator` is parsed as an [EvaluatorKind] and `depth` as a positive integer
    pub fn from_names(evaluator: &str, depth: &str) -> Result<Self, PlanError> {
        let evaluator: EvaluatorKind = evaluator.parse()?;
        let depth: i64 = depth
            .trim()
            .parse()
            .map_err(|_| PlanError::InvalidDepth(depth.to_owned()))?;
        let depth = usize::try_from(depth).map_err(|_| PlanError::NonPositiveDepth(depth))?;

        Self::new(evaluator, depth)
    }
}

impl Default for SearchPlan<EvaluatorKind> {
    fn default() -> Self {
        Self {
            score_function: EvaluatorKind::default(),
            depth: DEFAULT_DEPTH,
        }
    }
}
