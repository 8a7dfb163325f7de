#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth-limited adversarial search for Pacman-style games. Pacman is
//! always agent `0` and maximizes; every other agent is a ghost that either minimizes (minimax
//! and alpha-beta) or moves uniformly at random (expectimax).
//!
//! The game itself is not part of this crate. Anything that implements [types::SearchableGame]
//! can be searched, and the evaluators in [evaluation] additionally need the feature traits
//! from [types].
//!
//! ```rust
//! use pacman_minimax::{best_action, EvaluatorKind, SearchMode, SearchPlan};
//! # use pacman_minimax::types::*;
//! # use pacman_minimax::InvalidAction;
//! # #[derive(Debug, Clone)]
//! # struct Countdown(u8);
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! # struct Tick;
//! # impl std::fmt::Display for Tick {
//! #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "tick") }
//! # }
//! # impl GameAction for Tick { const STOP: Self = Tick; }
//! # impl SearchableGame for Countdown {
//! #     type Action = Tick;
//! #     fn legal_actions(&self, _agent: AgentIndex) -> Vec<Tick> { vec![Tick] }
//! #     fn successor(&self, _agent: AgentIndex, _action: Tick) -> Result<Self, InvalidAction> {
//! #         Ok(Countdown(self.0.saturating_sub(1)))
//! #     }
//! #     fn is_win(&self) -> bool { self.0 == 0 }
//! #     fn is_lose(&self) -> bool { false }
//! #     fn num_agents(&self) -> usize { 2 }
//! #     fn score(&self) -> f64 { -(self.0 as f64) }
//! # }
//! # let game = Countdown(3);
//!
//! let plan = SearchPlan::new(|g: &Countdown| g.score(), 2).unwrap();
//! let action = best_action(&game, &plan, SearchMode::AlphaBeta).unwrap();
//! assert_eq!(action, Tick);
//! ```

pub mod types;

mod error;
pub use error::{InvalidAction, PlanError};

mod score;
pub use score::{EvaluatorKind, Score, Scorable};

pub mod evaluation;

mod plan;
pub use plan::{SearchMode, SearchPlan, DEFAULT_DEPTH};

mod instruments;
pub use instruments::{CountingInstruments, Instruments, SearchInstruments};

pub mod search;
pub use search::{best_action, SearchAgent, SearchReturn};

mod reflex;
pub use reflex::ReflexAgent;

#[cfg(test)]
pub(crate) mod tree_fixture;
