use std::ops::ControlFlow;

use derivative::Derivative;
use tracing::{debug, info_span};

use crate::{
    types::{AgentIndex, SearchableGame, PACMAN},
    InvalidAction, Instruments, Scorable, Score, SearchInstruments, SearchMode, SearchPlan,
};

use super::{
    policy::{next_turn, Accumulator, Bounds},
    SearchReturn,
};

#[derive(Derivative, Clone)]
#[derivative(Debug)]
/// This is the struct that wraps a [SearchPlan] and a [SearchMode] and can be used to pick
/// Pacman's moves
///
/// It also outputs traces using the [tracing] crate.
///
/// ```rust
/// use pacman_minimax::{CountingInstruments, EvaluatorKind, SearchAgent, SearchMode, SearchPlan};
///
/// let counts = CountingInstruments::new();
/// let plan = SearchPlan::<EvaluatorKind>::default();
/// let agent = SearchAgent::new(plan, SearchMode::Expectimax, "expecto").with_instruments(&counts);
///
/// assert_eq!(agent.mode(), SearchMode::Expectimax);
/// assert_eq!(agent.plan().depth(), 2);
/// assert_eq!(counts.leaves(), 0);
/// ```
pub struct SearchAgent<ScorableType, InstrumentsType = Instruments> {
    plan: SearchPlan<ScorableType>,
    mode: SearchMode,
    /// Name used in the traces of this agent
    pub name: &'static str,
    #[derivative(Debug = "ignore")]
    instruments: InstrumentsType,
}

impl<ScorableType> SearchAgent<ScorableType, Instruments> {
    /// Construct a new `SearchAgent`
    pub fn new(plan: SearchPlan<ScorableType>, mode: SearchMode, name: &'static str) -> Self {
        Self {
            plan,
            mode,
            name,
            instruments: Instruments {},
        }
    }
}

impl<ScorableType, InstrumentsType> SearchAgent<ScorableType, InstrumentsType> {
    /// Report what the searches of this agent do to `instruments`
    pub fn with_instruments<Other: SearchInstruments>(
        self,
        instruments: Other,
    ) -> SearchAgent<ScorableType, Other> {
        SearchAgent {
            plan: self.plan,
            mode: self.mode,
            name: self.name,
            instruments,
        }
    }

    /// The plan this agent searches with
    pub fn plan(&self) -> &SearchPlan<ScorableType> {
        &self.plan
    }

    /// What this agent assumes about the ghosts
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The instruments observing this agent's searches
    pub fn instruments(&self) -> &InstrumentsType {
        &self.instruments
    }

    /// Pick the next move to make
    ///
    /// This uses [SearchAgent::search()] and only keeps the chosen action. When Pacman has no
    /// legal move the answer is the game's STOP action.
    pub fn best_action<GameType>(&self, root: &GameType) -> Result<GameType::Action, InvalidAction>
    where
        GameType: SearchableGame,
        ScorableType: Scorable<GameType>,
        InstrumentsType: SearchInstruments,
    {
        Ok(self.search(root)?.best_action())
    }

    /// This runs the search to the depth of the plan, returning a struct with the value of every
    /// action Pacman has at the root.
    ///
    /// Errors from the game, such as a successor it refuses to generate, are returned as they
    /// are. Nothing is retried.
    pub fn search<GameType>(
        &self,
        root: &GameType,
    ) -> Result<SearchReturn<GameType::Action>, InvalidAction>
    where
        GameType: SearchableGame,
        ScorableType: Scorable<GameType>,
        InstrumentsType: SearchInstruments,
    {
        Searcher {
            plan: &self.plan,
            mode: self.mode,
            instruments: &self.instruments,
        }
        .search(root, self.name)
    }
}

/// Pick Pacman's move from `root` by searching `plan.depth()` full rounds under `mode`.
///
/// This is the stateless entry point. Use a [SearchAgent] to keep the configuration around, or
/// to observe the search with instruments.
pub fn best_action<GameType, ScorableType>(
    root: &GameType,
    plan: &SearchPlan<ScorableType>,
    mode: SearchMode,
) -> Result<GameType::Action, InvalidAction>
where
    GameType: SearchableGame,
    ScorableType: Scorable<GameType>,
{
    let searcher = Searcher {
        plan,
        mode,
        instruments: &Instruments {},
    };

    Ok(searcher.search(root, "best_action")?.best_action())
}

/// Everything the recursion needs, borrowed for the length of one search
struct Searcher<'a, ScorableType, InstrumentsType> {
    plan: &'a SearchPlan<ScorableType>,
    mode: SearchMode,
    instruments: &'a InstrumentsType,
}

impl<'a, ScorableType, InstrumentsType> Searcher<'a, ScorableType, InstrumentsType>
where
    InstrumentsType: SearchInstruments,
{
    fn search<GameType>(
        &self,
        root: &GameType,
        name: &str,
    ) -> Result<SearchReturn<GameType::Action>, InvalidAction>
    where
        GameType: SearchableGame,
        ScorableType: Scorable<GameType>,
    {
        info_span!(
            "search",
            agent_name = name,
            mode = %self.mode,
            depth = self.plan.depth(),
            chosen_action = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        )
        .in_scope(|| {
            let (round, agent) = next_turn(0, PACMAN, root.num_agents());
            let mut bounds = Bounds::unbounded();
            let mut incumbent = f64::NEG_INFINITY;
            let mut options = vec![];

            for action in root.legal_actions(PACMAN) {
                let successor = root.successor(PACMAN, action)?;
                let value = self.value(&successor, round, agent, bounds)?;
                debug!(%action, value, "scored root action");

                options.push((action, value));
                incumbent = incumbent.max(value);

                if self.mode == SearchMode::AlphaBeta {
                    bounds.alpha = bounds.alpha.max(incumbent);
                }
            }

            let result = SearchReturn::from_options(self.mode, self.plan.depth(), options);

            let current_span = tracing::Span::current();
            current_span.record(
                "chosen_action",
                format!("{}", result.best_action()).as_str(),
            );
            current_span.record("chosen_score", result.score());

            Ok(result)
        })
    }

    /// The value of `state`, where it is `agent`'s turn and `round` full rounds have been played
    /// below the root
    fn value<GameType>(
        &self,
        state: &GameType,
        round: usize,
        agent: AgentIndex,
        bounds: Bounds,
    ) -> Result<Score, InvalidAction>
    where
        GameType: SearchableGame,
        ScorableType: Scorable<GameType>,
    {
        if round >= self.plan.depth() || state.is_terminal() {
            self.instruments.observe_leaf(round);
            return Ok(self.plan.score_function().score(state));
        }

        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            self.instruments.observe_leaf(round);
            return Ok(self.plan.score_function().score(state));
        }

        self.instruments.observe_expansion(round, agent);

        let (next_round, next_agent) = next_turn(round, agent, state.num_agents());
        let mut accumulator = Accumulator::new(self.mode.aggregation_for(agent), bounds);

        for action in actions {
            let successor = state.successor(agent, action)?;
            let value = self.value(&successor, next_round, next_agent, accumulator.bounds())?;

            if let ControlFlow::Break(cut) = accumulator.push(value) {
                return Ok(cut);
            }
        }

        Ok(accumulator.finish())
    }
}
