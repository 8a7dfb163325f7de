use thiserror::Error;

/// Returned by a game when asked for the successor of an action that is not legal.
///
/// The search never recovers from this, it is handed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("agent {agent} can not take action {action} here")]
pub struct InvalidAction {
    /// The agent that tried to move
    pub agent: usize,
    /// The rejected action, as displayed by the game
    pub action: String,
}

impl InvalidAction {
    /// Build the error for `agent` taking `action`
    pub fn new(agent: usize, action: impl ToString) -> Self {
        Self {
            agent,
            action: action.to_string(),
        }
    }
}

/// A [crate::SearchPlan] or one of its parts could not be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Searches need at least one full round
    #[error("search depth must be positive, got {0}")]
    NonPositiveDepth(i64),
    /// The depth was not a number
    #[error("search depth `{0}` is not an integer")]
    InvalidDepth(String),
    /// No evaluator goes by this name
    #[error("unknown evaluation function `{0}`")]
    UnknownEvaluator(String),
    /// No search mode goes by this name
    #[error("unknown search mode `{0}`")]
    UnknownMode(String),
}
