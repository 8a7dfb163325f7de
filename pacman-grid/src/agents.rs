use std::{fmt::Display, str::FromStr};

use pacman_minimax::{
    evaluation::reflex_evaluation, EvaluatorKind, InvalidAction, ReflexAgent, Scorable,
    SearchAgent, SearchInstruments, SearchMode, SearchPlan,
};
use rand::RngCore;

use crate::{Direction, GridWorld};

/// Something that can play Pacman on a [GridWorld]
pub trait PacmanAgent {
    /// Used in logs
    fn name(&self) -> &str;

    /// The move to make in `world`
    fn next_action(
        &self,
        world: &GridWorld,
        rng: &mut dyn RngCore,
    ) -> Result<Direction, InvalidAction>;
}

/// An agent picked at runtime
pub type BoxedAgent = Box<dyn PacmanAgent>;

impl<ScorableType, InstrumentsType> PacmanAgent for SearchAgent<ScorableType, InstrumentsType>
where
    ScorableType: Scorable<GridWorld>,
    InstrumentsType: SearchInstruments,
{
    fn name(&self) -> &str {
        self.name
    }

    fn next_action(
        &self,
        world: &GridWorld,
        _rng: &mut dyn RngCore,
    ) -> Result<Direction, InvalidAction> {
        self.best_action(world)
    }
}

impl<ScorableType> PacmanAgent for ReflexAgent<ScorableType>
where
    ScorableType: Scorable<GridWorld>,
{
    fn name(&self) -> &str {
        "reflex"
    }

    fn next_action(
        &self,
        world: &GridWorld,
        rng: &mut dyn RngCore,
    ) -> Result<Direction, InvalidAction> {
        self.choose_action(world, rng)
    }
}

/// The agents a driver can pick by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    /// One move of lookahead with [reflex_evaluation]
    Reflex,
    /// A [SearchAgent] in the given mode
    Search(SearchMode),
}

impl AgentKind {
    /// Every agent, reflex first
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Reflex,
        AgentKind::Search(SearchMode::Minimax),
        AgentKind::Search(SearchMode::AlphaBeta),
        AgentKind::Search(SearchMode::Expectimax),
    ];

    /// Build the agent. `plan` is only used by the search agents
    pub fn build(self, plan: SearchPlan<EvaluatorKind>) -> BoxedAgent {
        match self {
            AgentKind::Reflex => Box::new(ReflexAgent::new(reflex_evaluation::<GridWorld>)),
            AgentKind::Search(mode) => {
                let name = match mode {
                    SearchMode::Minimax => "minimax",
                    SearchMode::AlphaBeta => "alpha-beta",
                    SearchMode::Expectimax => "expectimax",
                };
                Box::new(SearchAgent::new(plan, mode, name))
            }
        }
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "reflex" {
            return Ok(AgentKind::Reflex);
        }

        s.parse().map(AgentKind::Search).map_err(|_| {
            format!("unknown agent `{s}`, expected reflex, minimax, alpha-beta or expectimax")
        })
    }
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Reflex => write!(f, "reflex"),
            AgentKind::Search(mode) => write!(f, "{mode}"),
        }
    }
}
