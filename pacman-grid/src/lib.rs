#![deny(missing_debug_implementations, missing_docs)]
//! A Pacman game on a grid, implementing every trait the search in [pacman_minimax] needs.
//!
//! Games start from a text [Layout]. [GridWorld] holds the state of a game and produces the
//! successor for any legal move. [play_game] plays a game out with any [PacmanAgent] against a
//! [GhostPolicy].
//!
//! ```rust
//! use pacman_grid::{Direction, GridWorld, Layout};
//! use pacman_minimax::{best_action, EvaluatorKind, SearchMode, SearchPlan};
//!
//! let layout: Layout = "%%%%%\n%P.G%\n%%%%%".parse().unwrap();
//! let world = GridWorld::from_layout(&layout);
//! let plan = SearchPlan::<EvaluatorKind>::default();
//!
//! assert_eq!(
//!     best_action(&world, &plan, SearchMode::AlphaBeta).unwrap(),
//!     Direction::East
//! );
//! ```

mod direction;
pub use direction::Direction;

pub mod layout;
pub use layout::{Layout, LayoutError};

mod rules;
pub use rules::GridRules;

mod world;
pub use world::{GridWorld, Outcome};

pub mod ghosts;
pub use ghosts::{DirectionalGhost, GhostKind, GhostPolicy, RandomGhost};

mod agents;
pub use agents::{AgentKind, BoxedAgent, PacmanAgent};

mod game;
pub use game::{play_game, GameRecord};
