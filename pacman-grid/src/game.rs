use pacman_minimax::{
    types::{SearchableGame, PACMAN},
    InvalidAction,
};
use rand::RngCore;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::{agents::PacmanAgent, ghosts::GhostPolicy, world::Outcome, Direction, GridWorld};

/// What happened in a played out game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    /// `None` when the game hit the move limit before it was decided
    pub outcome: Option<Outcome>,
    /// The final score
    pub score: f64,
    /// Every move Pacman made, in order
    pub pacman_moves: Vec<Direction>,
    /// The board as it was when the game stopped
    pub final_board: String,
}

/// Play `world` until it is won or lost, or Pacman has made `max_moves` moves.
///
/// Pacman moves first every turn, then every ghost in agent order. A ghost without a legal
/// move sits the turn out.
pub fn play_game(
    world: GridWorld,
    pacman: &dyn PacmanAgent,
    ghosts: &dyn GhostPolicy,
    rng: &mut dyn RngCore,
    max_moves: usize,
) -> Result<GameRecord, InvalidAction> {
    info_span!("game", agent = pacman.name(), max_moves).in_scope(|| {
        let mut world = world;
        let mut pacman_moves = vec![];

        while !world.is_terminal() && pacman_moves.len() < max_moves {
            let action = pacman.next_action(&world, rng)?;
            world = world.successor(PACMAN, action)?;
            pacman_moves.push(action);
            info!(
                turn = pacman_moves.len(),
                %action,
                score = world.score(),
                "pacman moved"
            );

            for ghost in 1..world.num_agents() {
                if world.is_terminal() {
                    break;
                }

                if let Some(action) = ghosts.choose_action(&world, ghost, rng) {
                    world = world.successor(ghost, action)?;
                    debug!(ghost, %action, "ghost moved");
                }
            }
        }

        info!(outcome = ?world.outcome(), score = world.score(), "game over");

        Ok(GameRecord {
            outcome: world.outcome(),
            score: world.score(),
            pacman_moves,
            final_board: world.to_string(),
        })
    })
}
