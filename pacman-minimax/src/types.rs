//! The traits a game has to implement to be searched and evaluated.
//!
//! [SearchableGame] is everything the search itself needs. The remaining traits expose board
//! features and are only required by the evaluators in [crate::evaluation].

use std::fmt::{Debug, Display};

use crate::InvalidAction;

/// Index of an agent in the turn order. Pacman, the maximizer, is always `0`
pub type AgentIndex = usize;

/// The agent index of Pacman, the maximizing agent
pub const PACMAN: AgentIndex = 0;

/// An action an agent can take
pub trait GameAction: Copy + Debug + Display + PartialEq {
    /// The no-op action. Returned when there is nothing better to suggest
    const STOP: Self;
}

/// The contract the search engine relies on.
///
/// Implementations must treat `self` as immutable: [SearchableGame::successor] returns a new
/// game and leaves the current one untouched.
pub trait SearchableGame: Sized {
    /// The actions agents pick from
    type Action: GameAction;

    /// All actions `agent` may currently take. An empty list marks a leaf
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The game after `agent` takes `action`
    fn successor(&self, agent: AgentIndex, action: Self::Action) -> Result<Self, InvalidAction>;

    /// Pacman has won this game
    fn is_win(&self) -> bool;

    /// Pacman has lost this game
    fn is_lose(&self) -> bool;

    /// A game is over once it is won or lost
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Number of agents taking turns, Pacman included
    fn num_agents(&self) -> usize;

    /// The running game score
    fn score(&self) -> f64;
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// Build a position from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The manhattan distance between two cells
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What an evaluator can see of a ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostState {
    /// Where the ghost currently is
    pub position: Position,
    /// Moves left until the ghost stops being scared. Zero means the ghost is dangerous
    pub scared_timer: u32,
}

impl GhostState {
    /// Scared ghosts can be eaten instead of eating Pacman
    pub fn is_scared(&self) -> bool {
        self.scared_timer != 0
    }
}

/// Games that know where Pacman is
pub trait PacmanPositionGettableGame {
    /// Pacman's current cell
    fn pacman_position(&self) -> Position;
}

/// Games with food and capsules on the board
pub trait FoodGettableGame {
    /// Every cell that still holds food
    fn food_positions(&self) -> Vec<Position>;

    /// Every cell that still holds a capsule
    fn capsule_positions(&self) -> Vec<Position>;

    /// How much food is left
    fn food_count(&self) -> usize {
        self.food_positions().len()
    }
}

/// Games with ghosts
pub trait GhostGettableGame {
    /// The ghosts in agent order, so the ghost at index `i` is agent `i + 1`
    fn ghost_states(&self) -> Vec<GhostState>;
}

/// Games played on a bounded board
pub trait SizeDeterminableGame {
    /// Board width, outer walls included
    fn get_width(&self) -> u32;

    /// Board height, outer walls included
    fn get_height(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(1, 1);
        let b = Position::new(4, -1);

        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_scared_ghost() {
        let mut ghost = GhostState {
            position: Position::new(2, 3),
            scared_timer: 0,
        };
        assert!(!ghost.is_scared());

        ghost.scared_timer = 3;
        assert!(ghost.is_scared());
    }
}
