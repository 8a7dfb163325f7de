use std::{fmt::Display, str::FromStr};

use pacman_minimax::types::{GameAction, Position};
use serde::{Deserialize, Serialize};

/// The moves available on the grid. `y` grows downwards, so [Direction::North] is one row up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[allow(missing_docs)]
    North,
    #[allow(missing_docs)]
    South,
    #[allow(missing_docs)]
    East,
    #[allow(missing_docs)]
    West,
    /// Stay in place. Only Pacman may do this
    Stop,
}

impl Direction {
    /// Every direction that actually moves, in the order legal actions are listed
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing the other way. [Direction::Stop] is its own reverse
    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// The change in `(x, y)` from taking this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// Where you end up when taking this direction from `position`
    pub fn step(self, position: Position) -> Position {
        let (dx, dy) = self.delta();

        Position::new(position.x + dx, position.y + dy)
    }
}

impl GameAction for Direction {
    const STOP: Self = Direction::Stop;
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        };

        write!(f, "{name}")
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            "stop" => Ok(Direction::Stop),
            other => Err(format!("`{other}` is not a direction")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        for direction in Direction::MOVES {
            assert_ne!(direction.reverse(), direction);
            assert_eq!(direction.reverse().reverse(), direction);
        }
        assert_eq!(Direction::Stop.reverse(), Direction::Stop);
    }

    #[test]
    fn test_step() {
        let start = Position::new(3, 3);

        assert_eq!(Direction::North.step(start), Position::new(3, 2));
        assert_eq!(Direction::South.step(start), Position::new(3, 4));
        assert_eq!(Direction::East.step(start), Position::new(4, 3));
        assert_eq!(Direction::West.step(start), Position::new(2, 3));
        assert_eq!(Direction::Stop.step(start), start);
    }

    #[test]
    fn test_names() {
        for direction in Direction::MOVES {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
        assert!("up".parse::<Direction>().is_err());
        assert_eq!(Direction::STOP, Direction::Stop);
    }
}
