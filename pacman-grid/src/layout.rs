//! Text layouts.
//!
//! Every character is one cell: `%` is a wall, `.` food, `o` a capsule, `P` Pacman's start, `G`
//! a ghost's start and a space an empty floor cell. The outer ring of cells must be walls. Ghosts
//! are numbered in reading order, top to bottom and left to right.

use std::str::FromStr;

use pacman_minimax::types::Position;
use thiserror::Error;

/// A layout that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// There were no rows at all
    #[error("the layout is empty")]
    Empty,
    /// Every row has to be as wide as the first one
    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        /// Zero based row number
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        found: usize,
    },
    /// A character that does not describe any kind of cell
    #[error("unknown cell `{cell}` at {position}")]
    UnknownCell {
        /// The offending character
        cell: char,
        /// Where it was found
        position: Position,
    },
    /// There is no `P`
    #[error("the layout has no Pacman")]
    MissingPacman,
    /// There is more than one `P`
    #[error("the layout has a second Pacman at {0}")]
    ExtraPacman(Position),
    /// A cell on the edge of the layout that is not a wall
    #[error("the border of the layout is open at {0}")]
    OpenBorder(Position),
}

/// The walls of a board. Anything outside the board counts as a wall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Walls {
    /// Board width, outer walls included
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height, outer walls included
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Is there a wall at `position`
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }
        let (x, y) = (position.x as u32, position.y as u32);
        if x >= self.width || y >= self.height {
            return true;
        }

        self.cells[(y * self.width + x) as usize]
    }
}

/// A parsed layout, ready to start games from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    walls: Walls,
    food: Vec<Position>,
    capsules: Vec<Position>,
    pacman: Position,
    ghosts: Vec<Position>,
}

impl Layout {
    #[allow(missing_docs)]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    /// Every cell that starts with food, in reading order
    pub fn food(&self) -> &[Position] {
        &self.food
    }

    /// Every cell that starts with a capsule, in reading order
    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    /// Pacman's starting cell
    pub fn pacman(&self) -> Position {
        self.pacman
    }

    /// The starting cell of each ghost, in agent order
    pub fn ghosts(&self) -> &[Position] {
        &self.ghosts
    }

    /// Drop every ghost after the first `count`
    pub fn limit_ghosts(mut self, count: usize) -> Self {
        self.ghosts.truncate(count);
        self
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .trim_end()
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();

        let width = rows.first().map(Vec::len).ok_or(LayoutError::Empty)?;
        if width == 0 {
            return Err(LayoutError::Empty);
        }
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut food = vec![];
        let mut capsules = vec![];
        let mut pacman = None;
        let mut ghosts = vec![];

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }

            for (x, &cell) in row.iter().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                if on_border && cell != '%' {
                    return Err(LayoutError::OpenBorder(position));
                }

                cells.push(cell == '%');
                match cell {
                    '%' | ' ' => {}
                    '.' => food.push(position),
                    'o' => capsules.push(position),
                    'G' => ghosts.push(position),
                    'P' => {
                        if pacman.replace(position).is_some() {
                            return Err(LayoutError::ExtraPacman(position));
                        }
                    }
                    cell => return Err(LayoutError::UnknownCell { cell, position }),
                }
            }
        }

        Ok(Layout {
            walls: Walls {
                width: width as u32,
                height: height as u32,
                cells,
            },
            food,
            capsules,
            pacman: pacman.ok_or(LayoutError::MissingPacman)?,
            ghosts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let layout: Layout = include_str!("../layouts/test_classic.lay").parse().unwrap();

        assert_eq!(layout.walls().width(), 5);
        assert_eq!(layout.walls().height(), 10);
        assert_eq!(layout.pacman(), Position::new(1, 8));
        assert_eq!(layout.ghosts(), &[Position::new(2, 2)]);
        assert_eq!(layout.food().len(), 8);
        assert!(layout.capsules().is_empty());

        assert!(layout.walls().is_wall(Position::new(0, 0)));
        assert!(!layout.walls().is_wall(Position::new(1, 1)));
        assert!(layout.walls().is_wall(Position::new(-1, 4)));
        assert!(layout.walls().is_wall(Position::new(2, 10)));
    }

    #[test]
    fn test_ghosts_in_reading_order() {
        let layout: Layout = "%%%%%%\n%G PG%\n%G   %\n%%%%%%".parse().unwrap();

        assert_eq!(
            layout.ghosts(),
            &[
                Position::new(1, 1),
                Position::new(4, 1),
                Position::new(1, 2)
            ]
        );
        assert_eq!(layout.clone().limit_ghosts(1).ghosts(), &[Position::new(1, 1)]);
    }

    #[test]
    fn test_trailing_newlines_and_carriage_returns() {
        let layout: Layout = "%%%%\r\n%Po%\r\n%%%%\r\n\n".parse().unwrap();

        assert_eq!(layout.walls().height(), 3);
        assert_eq!(layout.capsules(), &[Position::new(2, 1)]);
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Layout>(), Err(LayoutError::Empty));
        assert_eq!(
            "%%%%\n%P%\n%%%%".parse::<Layout>(),
            Err(LayoutError::Ragged {
                row: 1,
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            "%%%%\n%Px%\n%%%%".parse::<Layout>(),
            Err(LayoutError::UnknownCell {
                cell: 'x',
                position: Position::new(2, 1)
            })
        );
        assert_eq!(
            "%%%%\n%..%\n%%%%".parse::<Layout>(),
            Err(LayoutError::MissingPacman)
        );
        assert_eq!(
            "%%%%\n%PP%\n%%%%".parse::<Layout>(),
            Err(LayoutError::ExtraPacman(Position::new(2, 1)))
        );
        assert_eq!(
            "%%%%\n%P. \n%%%%".parse::<Layout>(),
            Err(LayoutError::OpenBorder(Position::new(3, 1)))
        );
    }
}
