use std::{fmt::Display, sync::Arc};

use itertools::Itertools;
use pacman_minimax::{
    types::{
        AgentIndex, FoodGettableGame, GhostGettableGame, GhostState, PacmanPositionGettableGame,
        Position, SearchableGame, SizeDeterminableGame, PACMAN,
    },
    InvalidAction,
};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::{
    layout::{Layout, Walls},
    Direction, GridRules,
};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Pacman ate the last piece of food
    Win,
    /// A ghost caught Pacman
    Lose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ghost {
    start: Position,
    position: Position,
    /// The last move this ghost made, so it knows which way is backwards
    direction: Direction,
    scared_timer: u32,
}

impl Ghost {
    fn new(start: Position) -> Self {
        Self {
            start,
            position: start,
            direction: Direction::Stop,
            scared_timer: 0,
        }
    }

    fn send_home(&mut self) {
        *self = Ghost::new(self.start);
    }
}

/// A game of Pacman on a grid.
///
/// Every move produces a new `GridWorld` through [SearchableGame::successor]; the walls are
/// shared between all of them.
#[derive(Debug, Clone)]
pub struct GridWorld {
    walls: Arc<Walls>,
    rules: GridRules,
    pacman: Position,
    food: FxHashSet<Position>,
    capsules: Vec<Position>,
    ghosts: Vec<Ghost>,
    score: f64,
    outcome: Option<Outcome>,
}

impl GridWorld {
    /// Start a game on `layout` played with `rules`
    pub fn new(layout: &Layout, rules: GridRules) -> Self {
        Self {
            walls: Arc::new(layout.walls().clone()),
            rules,
            pacman: layout.pacman(),
            food: layout.food().iter().copied().collect(),
            capsules: layout.capsules().to_vec(),
            ghosts: layout.ghosts().iter().copied().map(Ghost::new).collect(),
            score: 0.0,
            outcome: None,
        }
    }

    /// Start a game on `layout` with the default rules
    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout, GridRules::default())
    }

    /// `None` while the game is still going
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The rules this game is played with
    pub fn rules(&self) -> &GridRules {
        &self.rules
    }

    #[allow(missing_docs)]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = Direction> + '_ {
        Direction::MOVES
            .into_iter()
            .filter(move |direction| !self.walls.is_wall(direction.step(from)))
    }

    fn move_pacman(&mut self, direction: Direction) {
        self.pacman = direction.step(self.pacman);
        self.score -= self.rules.time_penalty;

        if self.food.remove(&self.pacman) {
            self.score += self.rules.food_score;
            if self.food.is_empty() {
                self.score += self.rules.win_score;
                self.outcome = Some(Outcome::Win);
            }
        }

        if let Some(index) = self.capsules.iter().position(|&c| c == self.pacman) {
            self.capsules.remove(index);
            for ghost in &mut self.ghosts {
                ghost.scared_timer = self.rules.scared_time;
            }
        }

        for index in 0..self.ghosts.len() {
            self.resolve_collision(index);
        }
    }

    fn move_ghost(&mut self, index: usize, direction: Direction) {
        let ghost = &mut self.ghosts[index];
        ghost.position = direction.step(ghost.position);
        ghost.direction = direction;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        self.resolve_collision(index);
    }

    /// A scared ghost on Pacman's cell is eaten. Any other ghost there ends the game, unless
    /// Pacman already won it with this move
    fn resolve_collision(&mut self, index: usize) {
        let ghost = &mut self.ghosts[index];
        if ghost.position != self.pacman {
            return;
        }

        if ghost.scared_timer > 0 {
            ghost.send_home();
            self.score += self.rules.ghost_eaten_score;
        } else if self.outcome.is_none() {
            self.score -= self.rules.lose_penalty;
            self.outcome = Some(Outcome::Lose);
        }
    }
}

impl SearchableGame for GridWorld {
    type Action = Direction;

    /// Pacman may move into any open cell or stand still. Ghosts have to move, and only turn
    /// around when there is nowhere else to go. Nobody moves once the game is over
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.is_terminal() {
            return vec![];
        }

        if agent == PACMAN {
            let mut actions = self.open_moves(self.pacman).collect_vec();
            actions.push(Direction::Stop);
            return actions;
        }

        let ghost = match self.ghosts.get(agent - 1) {
            Some(ghost) => ghost,
            None => return vec![],
        };
        let mut actions = self.open_moves(ghost.position).collect_vec();
        if actions.len() > 1 {
            let backwards = ghost.direction.reverse();
            actions.retain(|&action| action != backwards);
        }

        actions
    }

    fn successor(&self, agent: AgentIndex, action: Direction) -> Result<Self, InvalidAction> {
        if !self.legal_actions(agent).contains(&action) {
            return Err(InvalidAction::new(agent, action));
        }

        let mut next = self.clone();
        if agent == PACMAN {
            next.move_pacman(action);
        } else {
            next.move_ghost(agent - 1, action);
        }

        Ok(next)
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PacmanPositionGettableGame for GridWorld {
    fn pacman_position(&self) -> Position {
        self.pacman
    }
}

impl FoodGettableGame for GridWorld {
    fn food_positions(&self) -> Vec<Position> {
        self.food.iter().copied().sorted().collect()
    }

    fn capsule_positions(&self) -> Vec<Position> {
        self.capsules.clone()
    }

    fn food_count(&self) -> usize {
        self.food.len()
    }
}

impl GhostGettableGame for GridWorld {
    fn ghost_states(&self) -> Vec<GhostState> {
        self.ghosts
            .iter()
            .map(|ghost| GhostState {
                position: ghost.position,
                scared_timer: ghost.scared_timer,
            })
            .collect()
    }
}

impl SizeDeterminableGame for GridWorld {
    fn get_width(&self) -> u32 {
        self.walls.width()
    }

    fn get_height(&self) -> u32 {
        self.walls.height()
    }
}

/// Draws the board in the same characters a layout is written in
impl Display for GridWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.walls.height() as i32 {
            for x in 0..self.walls.width() as i32 {
                let position = Position::new(x, y);
                let cell = if position == self.pacman {
                    'P'
                } else if self.ghosts.iter().any(|g| g.position == position) {
                    'G'
                } else if self.walls.is_wall(position) {
                    '%'
                } else if self.food.contains(&position) {
                    '.'
                } else if self.capsules.contains(&position) {
                    'o'
                } else {
                    ' '
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
