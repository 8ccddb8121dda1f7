//! Reading a finished search back off the grid.
//!
//! Path cells are listed in row-major order, the order a scan of the grid
//! meets them, not the order the robot travels them. Directions are derived
//! from neighboring entries of that same list.

use crate::error::PathError;
use crate::grid::{Cell, Direction, Grid, Position};
use std::fmt;

/// True when the grid holds at least one `Path` cell.
pub fn path_found(grid: &Grid) -> bool {
    grid.iter().any(|(_, cell)| cell == Cell::Path)
}

/// Every `Path` cell, row by row, left to right.
pub fn collect_path_coordinates(grid: &Grid) -> Vec<Position> {
    grid.iter()
        .filter(|&(_, cell)| cell == Cell::Path)
        .map(|(pos, _)| pos)
        .collect()
}

/// Direction of travel from `from` to `to`.
///
/// Only meaningful for horizontal or vertical pairs; any change of row is
/// reported as a vertical move.
pub fn direction_between(from: Position, to: Position) -> Direction {
    if from.y == to.y {
        if to.x > from.x {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if to.y > from.y {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// 1-based move number.
    pub step: usize,
    pub from: Position,
    pub direction: Direction,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {}: {} {}", self.step, self.from, self.direction)
    }
}

/// Human-readable directions for a list of path coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDirections {
    moves: Vec<Move>,
    final_position: Option<Position>,
}

impl PathDirections {
    pub fn from_coordinates(coordinates: &[Position]) -> Self {
        let moves = coordinates
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Move {
                step: i + 1,
                from: pair[0],
                direction: direction_between(pair[0], pair[1]),
            })
            .collect();

        PathDirections {
            moves,
            final_position: coordinates.last().copied(),
        }
    }

    pub fn from_grid(grid: &Grid) -> Self {
        Self::from_coordinates(&collect_path_coordinates(grid))
    }

    pub fn is_empty(&self) -> bool {
        self.final_position.is_none()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn get(&self, index: usize) -> Result<&Move, PathError> {
        self.moves.get(index).ok_or(PathError::IndexOutOfRange {
            index,
            len: self.moves.len(),
        })
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn final_position(&self) -> Option<Position> {
        self.final_position
    }
}

impl fmt::Display for PathDirections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(last) = self.final_position else {
            return writeln!(f, "No path directions available.");
        };
        for step in &self.moves {
            writeln!(f, "{}", step)?;
        }
        writeln!(f, "Final position: {}", last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_rules() {
        let origin = Position::new(2, 2);
        assert_eq!(direction_between(origin, Position::new(3, 2)), Direction::Right);
        assert_eq!(direction_between(origin, Position::new(1, 2)), Direction::Left);
        assert_eq!(direction_between(origin, Position::new(2, 3)), Direction::Down);
        assert_eq!(direction_between(origin, Position::new(2, 1)), Direction::Up);
        // Row changes win over column changes.
        assert_eq!(direction_between(origin, Position::new(0, 3)), Direction::Down);
    }

    #[test]
    fn coordinates_follow_scan_order() {
        let grid: Grid = "R P .\n. P P\nG P .".parse().unwrap();
        assert!(path_found(&grid));
        assert_eq!(
            collect_path_coordinates(&grid),
            vec![
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn renders_moves_and_final_position() {
        let directions = PathDirections::from_coordinates(&[
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(2, 1),
        ]);
        assert_eq!(directions.len(), 2);
        assert_eq!(directions.final_position(), Some(Position::new(2, 1)));
        assert_eq!(
            directions.to_string(),
            "Move 1: (1, 0) Down\nMove 2: (1, 1) Right\nFinal position: (2, 1)\n"
        );
    }

    #[test]
    fn single_coordinate_has_only_final_position() {
        let directions = PathDirections::from_coordinates(&[Position::new(4, 0)]);
        assert!(!directions.is_empty());
        assert_eq!(directions.len(), 0);
        assert_eq!(directions.to_string(), "Final position: (4, 0)\n");
    }

    #[test]
    fn empty_path_has_no_directions() {
        let grid: Grid = "R / G".parse().unwrap();
        assert!(!path_found(&grid));

        let directions = PathDirections::from_grid(&grid);
        assert!(directions.is_empty());
        assert_eq!(directions.to_string(), "No path directions available.\n");
        assert_eq!(
            directions.get(0),
            Err(PathError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
