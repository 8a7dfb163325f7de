//! How ghosts pick their moves when a game is actually played out.
//!
//! The search never uses these, it only ever assumes the worst case or a uniform choice.

use std::str::FromStr;

use itertools::Itertools;
use pacman_minimax::types::{
    AgentIndex, GhostGettableGame, PacmanPositionGettableGame, SearchableGame,
};
use rand::{seq::SliceRandom, Rng, RngCore};

use crate::{Direction, GridWorld};

/// A way of moving a ghost
pub trait GhostPolicy {
    /// Pick a move for the ghost that is agent `ghost`. `None` when it has no legal move
    fn choose_action(
        &self,
        world: &GridWorld,
        ghost: AgentIndex,
        rng: &mut dyn RngCore,
    ) -> Option<Direction>;
}

/// Picks uniformly among the legal moves
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGhost;

impl GhostPolicy for RandomGhost {
    fn choose_action(
        &self,
        world: &GridWorld,
        ghost: AgentIndex,
        rng: &mut dyn RngCore,
    ) -> Option<Direction> {
        world.legal_actions(ghost).choose(rng).copied()
    }
}

/// Chases Pacman, or runs away from it while scared.
///
/// With probability `attack` (or `flee` when scared) the ghost picks among the moves that bring
/// it closest to Pacman (or furthest away). Otherwise it picks uniformly among all legal moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalGhost {
    #[allow(missing_docs)]
    pub attack: f64,
    #[allow(missing_docs)]
    pub flee: f64,
}

impl Default for DirectionalGhost {
    fn default() -> Self {
        Self {
            attack: 0.8,
            flee: 0.8,
        }
    }
}

impl GhostPolicy for DirectionalGhost {
    fn choose_action(
        &self,
        world: &GridWorld,
        ghost: AgentIndex,
        rng: &mut dyn RngCore,
    ) -> Option<Direction> {
        let actions = world.legal_actions(ghost);
        let state = world.ghost_states().get(ghost.checked_sub(1)?).copied()?;
        let pacman = world.pacman_position();

        let distances = actions
            .iter()
            .map(|action| action.step(state.position).manhattan_distance(&pacman))
            .collect_vec();
        let (target, probability) = if state.is_scared() {
            (distances.iter().max(), self.flee)
        } else {
            (distances.iter().min(), self.attack)
        };
        let target = *target?;

        let best = actions
            .iter()
            .zip(&distances)
            .filter(|(_, &distance)| distance == target)
            .map(|(&action, _)| action)
            .collect_vec();

        if rng.gen_bool(probability.clamp(0.0, 1.0)) {
            best.choose(rng).copied()
        } else {
            actions.choose(rng).copied()
        }
    }
}

/// The ghost policies, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GhostKind {
    /// [RandomGhost]
    #[default]
    Random,
    /// [DirectionalGhost] with its default probabilities
    Directional,
}

impl GhostKind {
    /// Build the policy this kind names
    pub fn policy(self) -> Box<dyn GhostPolicy> {
        match self {
            GhostKind::Random => Box::new(RandomGhost),
            GhostKind::Directional => Box::<DirectionalGhost>::default(),
        }
    }
}

impl FromStr for GhostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(GhostKind::Random),
            "directional" => Ok(GhostKind::Directional),
            other => Err(format!("unknown ghost policy `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn world(layout: &str) -> GridWorld {
        GridWorld::from_layout(&layout.parse().unwrap())
    }

    #[test]
    fn test_random_ghost_only_picks_legal_moves() {
        let world = world(include_str!("../layouts/test_classic.lay"));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let action = RandomGhost.choose_action(&world, 1, &mut rng).unwrap();
            assert!(world.legal_actions(1).contains(&action));
        }
    }

    #[test]
    fn test_directional_ghost_always_chases_when_certain() {
        // The ghost sits in a crossing, Pacman is straight below it
        let world = world("%%%%%\n%.G.%\n%% %%\n%%P%%\n%%%%%");
        let ghost = DirectionalGhost {
            attack: 1.0,
            flee: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            assert_eq!(
                ghost.choose_action(&world, 1, &mut rng),
                Some(Direction::South)
            );
        }
    }

    #[test]
    fn test_directional_ghost_flees_when_scared() {
        let world = world("%%%%%\n%.G.%\n%% %%\n%%o%%\n%%P%%\n%%%%%");
        let powered = world.successor(0, Direction::North).unwrap();
        let ghost = DirectionalGhost {
            attack: 1.0,
            flee: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let action = ghost.choose_action(&powered, 1, &mut rng).unwrap();
            assert!(matches!(action, Direction::East | Direction::West));
        }
    }

    #[test]
    fn test_no_moves_for_pacman_or_missing_ghosts() {
        let world = world(include_str!("../layouts/test_classic.lay"));
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            DirectionalGhost::default().choose_action(&world, 0, &mut rng),
            None
        );
        assert_eq!(RandomGhost.choose_action(&world, 3, &mut rng), None);
    }

    #[test]
    fn test_names() {
        assert_eq!("random".parse::<GhostKind>(), Ok(GhostKind::Random));
        assert_eq!(
            "directional".parse::<GhostKind>(),
            Ok(GhostKind::Directional)
        );
        assert!("clyde".parse::<GhostKind>().is_err());
    }
}
