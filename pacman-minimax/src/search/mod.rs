//! Depth limited search over the moves of Pacman and the ghosts.
//!
//! The three [crate::SearchMode]s share one recursion. Pacman's nodes take the maximum of their
//! children. Ghost nodes take the minimum for minimax and alpha-beta, or the mean for expectimax,
//! which treats each ghost as picking uniformly at random among its legal moves.
//!
//! Agents move in index order, Pacman first. The depth of a search counts full rounds, so a depth
//! of 2 with two ghosts looks six moves ahead. A node is a leaf, and gets scored by the plan's
//! evaluation function, when the depth is used up or the game is won or lost. A node where the
//! moving agent has no legal action is scored the same way.
//!
//! Alpha-Beta prunes only when a value is strictly outside the window. This keeps its answer,
//! root value included, identical to plain minimax. Ties always go to the first action the game
//! listed.

mod policy;

mod search_return;
pub use search_return::SearchReturn;

mod engine;
pub use engine::{best_action, SearchAgent};
