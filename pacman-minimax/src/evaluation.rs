//! Evaluation functions that turn a game into a [Score].
//!
//! [score_evaluation] and [better_evaluation] are leaf heuristics for the search.
//! [reflex_evaluation] scores the game one move ahead and is what [crate::ReflexAgent] uses by
//! default. All of them are pure; calling them twice on the same game gives the same bits.

use crate::{
    types::{
        FoodGettableGame, GhostGettableGame, PacmanPositionGettableGame, SearchableGame,
        SizeDeterminableGame,
    },
    Score, Scorable,
};

/// The game score, untouched.
///
/// This is the default evaluation for the search agents, and the one to use when the search
/// itself is what is being tested.
pub fn score_evaluation<GameType: SearchableGame>(game: &GameType) -> Score {
    game.score()
}

/// [BetterEvaluation] with its default weights
pub fn better_evaluation<GameType>(game: &GameType) -> Score
where
    GameType:
        PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame + SizeDeterminableGame,
{
    BetterEvaluation::default().evaluate(game)
}

/// A heuristic that hunts scared ghosts, runs from the others, heads for capsules and clears
/// food.
///
/// The weights were tuned by hand. What matters is their ordering: ghosts dominate capsules,
/// which dominate the per-food penalty, which dominates the pull towards the nearest food.
///
/// ```
/// use pacman_minimax::evaluation::BetterEvaluation;
///
/// let weights = BetterEvaluation::default();
///
/// assert_eq!(weights.ghost_radius, 2);
/// assert_eq!(weights.ghost_weight, 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetterEvaluation {
    /// Ghosts closer than this many cells are considered
    pub ghost_radius: u32,
    /// Reward for a nearby scared ghost, or penalty for a nearby dangerous one, at distance 0.
    /// It is divided by `distance + 1`
    pub ghost_weight: f64,
    /// Capsules closer than this many cells are rewarded
    pub capsule_radius: u32,
    /// Reward for a nearby capsule, divided by its distance
    pub capsule_weight: f64,
    /// Flat reward for standing on a capsule
    pub on_capsule_bonus: f64,
    /// Penalty per remaining piece of food
    pub food_count_penalty: f64,
}

impl Default for BetterEvaluation {
    fn default() -> Self {
        Self {
            ghost_radius: 2,
            ghost_weight: 1000.0,
            capsule_radius: 5,
            capsule_weight: 500.0,
            on_capsule_bonus: 600.0,
            food_count_penalty: 10.0,
        }
    }
}

impl BetterEvaluation {
    /// Score the game with these weights
    pub fn evaluate<GameType>(&self, game: &GameType) -> Score
    where
        GameType: PacmanPositionGettableGame
            + FoodGettableGame
            + GhostGettableGame
            + SizeDeterminableGame,
    {
        let pacman = game.pacman_position();
        let mut score = 0.0;

        for ghost in game.ghost_states() {
            let distance = pacman.manhattan_distance(&ghost.position);
            if distance < self.ghost_radius {
                let pull = self.ghost_weight / f64::from(distance + 1);
                if ghost.is_scared() {
                    score += pull;
                } else {
                    score -= pull;
                }
            }
        }

        let nearest_capsule = game
            .capsule_positions()
            .iter()
            .map(|capsule| pacman.manhattan_distance(capsule))
            .min();
        match nearest_capsule {
            Some(0) => score += self.on_capsule_bonus,
            Some(distance) if distance < self.capsule_radius => {
                score += self.capsule_weight / f64::from(distance)
            }
            _ => {}
        }

        let food = game.food_positions();
        // With no food left we fall back to the furthest distance the board allows, so an empty
        // board is not rewarded as if food were right next to us
        let nearest_food = food
            .iter()
            .map(|f| pacman.manhattan_distance(f).max(1))
            .min()
            .unwrap_or_else(|| max_distance(game));

        score + 1.0 / f64::from(nearest_food) - food.len() as f64 * self.food_count_penalty
    }
}

impl<GameType> Scorable<GameType> for BetterEvaluation
where
    GameType:
        PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame + SizeDeterminableGame,
{
    fn score(&self, game: &GameType) -> Score {
        self.evaluate(game)
    }
}

/// The longest manhattan distance between two cells inside the outer walls
fn max_distance<GameType: SizeDeterminableGame>(game: &GameType) -> u32 {
    let inner_width = game.get_width().saturating_sub(2);
    let inner_height = game.get_height().saturating_sub(2);

    (inner_width + inner_height).max(1)
}

/// Scores the game reached after a single move of Pacman.
///
/// Starts from the game score, adds the reciprocal distance to the nearest food, subtracts the
/// reciprocal of the summed distances to every ghost, and subtracts one for every ghost that is
/// at most a single cell away.
pub fn reflex_evaluation<GameType>(successor: &GameType) -> Score
where
    GameType: SearchableGame + PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame,
{
    let pacman = successor.pacman_position();

    let food_term = successor
        .food_positions()
        .iter()
        .map(|f| pacman.manhattan_distance(f).max(1))
        .min()
        .map_or(0.0, |distance| 1.0 / f64::from(distance));

    let ghost_distances: Vec<u32> = successor
        .ghost_states()
        .iter()
        .map(|ghost| pacman.manhattan_distance(&ghost.position))
        .collect();
    let ghost_term = if ghost_distances.is_empty() {
        0.0
    } else {
        1.0 / f64::from(ghost_distances.iter().sum::<u32>().max(1))
    };
    let adjacent_ghosts = ghost_distances.iter().filter(|&&d| d <= 1).count();

    successor.score() + food_term - ghost_term - adjacent_ghosts as f64
}
