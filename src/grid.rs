use crate::error::GridError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Largest number of rows or columns a grid may have.
pub const MAX_DIMENSION: usize = 50;

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Obstacle,
    Start,
    Goal,
    Path,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Obstacle => '/',
            Cell::Start => 'R',
            Cell::Goal => 'G',
            Cell::Path => 'P',
        }
    }

    pub fn from_glyph(glyph: char) -> Result<Self, GridError> {
        match glyph {
            '.' => Ok(Cell::Empty),
            '/' => Ok(Cell::Obstacle),
            'R' => Ok(Cell::Start),
            'G' => Ok(Cell::Goal),
            'P' => Ok(Cell::Path),
            other => Err(GridError::UnknownGlyph(other)),
        }
    }
}

/// The four orthogonal moves. Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Expansion order used by the search engine.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(dx, dy)` for one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "Down",
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Left => "Left",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        check_dimensions(rows, columns)?;
        Ok(Grid {
            rows,
            columns,
            cells: vec![vec![Cell::Empty; columns]; rows],
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.columns && pos.y < self.rows
    }

    pub fn state_at(&self, pos: Position) -> Result<Cell, GridError> {
        self.check_bounds(pos)?;
        Ok(self.cells[pos.y][pos.x])
    }

    /// Overwrites a cell. Keeping a single start and a single goal is up to
    /// the caller.
    pub fn set_state(&mut self, pos: Position, state: Cell) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        self.cells[pos.y][pos.x] = state;
        Ok(())
    }

    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        if self.state_at(pos)? == Cell::Goal {
            return Err(GridError::StartIsGoal(pos));
        }
        self.set_state(pos, Cell::Start)
    }

    pub fn set_goal(&mut self, pos: Position) -> Result<(), GridError> {
        if self.state_at(pos)? == Cell::Start {
            return Err(GridError::StartIsGoal(pos));
        }
        self.set_state(pos, Cell::Goal)
    }

    /// Turns `count` randomly chosen empty cells into obstacles.
    ///
    /// Start and goal cells are never touched. The count is clamped to the
    /// number of empty cells, so the call always terminates. Returns the
    /// number of obstacles actually placed.
    pub fn place_obstacles<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let available = self.count(Cell::Empty);
        let target = if count > available {
            warn!(
                requested = count,
                available, "Not enough empty cells, clamping obstacle count"
            );
            available
        } else {
            count
        };

        let mut placed = 0;
        while placed < target {
            let y = rng.gen_range(0..self.rows);
            let x = rng.gen_range(0..self.columns);
            if self.cells[y][x] == Cell::Empty {
                self.cells[y][x] = Cell::Obstacle;
                placed += 1;
            }
        }
        placed
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Position { x, y }, cell))
        })
    }

    pub fn count(&self, state: Cell) -> usize {
        self.iter().filter(|&(_, cell)| cell == state).count()
    }

    /// First cell holding `state`, scanning row by row.
    pub fn locate(&self, state: Cell) -> Option<Position> {
        self.iter()
            .find(|&(_, cell)| cell == state)
            .map(|(pos, _)| pos)
    }

    /// Start and goal positions found by a single row-major scan.
    pub fn endpoints(&self) -> (Option<Position>, Option<Position>) {
        let mut start = None;
        let mut goal = None;
        for (pos, cell) in self.iter() {
            match cell {
                Cell::Start => start = Some(pos),
                Cell::Goal => goal = Some(pos),
                _ => {}
            }
        }
        (start, goal)
    }

    /// The in-bounds neighbor of `pos` one step towards `direction`.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let next = Position { x, y };
        self.contains(next).then_some(next)
    }

    /// Marks every cell of `route` as `Path`, leaving the start and goal
    /// cells as they are.
    pub fn mark_path(&mut self, route: &[Position]) {
        for &pos in route {
            if !self.contains(pos) {
                continue;
            }
            let cell = &mut self.cells[pos.y][pos.x];
            if *cell != Cell::Start && *cell != Cell::Goal {
                *cell = Cell::Path;
            }
        }
    }

    /// Resets every `Path` cell back to `Empty`.
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell == Cell::Path {
                *cell = Cell::Empty;
            }
        }
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

pub fn check_dimensions(rows: usize, columns: usize) -> Result<(), GridError> {
    let valid = 1..=MAX_DIMENSION;
    if valid.contains(&rows) && valid.contains(&columns) {
        Ok(())
    } else {
        Err(GridError::InvalidDimensions {
            rows,
            columns,
            max: MAX_DIMENSION,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the rendered layout back into a grid. Whitespace inside a row is
/// ignored and blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        for line in s.lines() {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Cell::from_glyph)
                .collect::<Result<Vec<_>, _>>()?;
            if row.is_empty() {
                continue;
            }
            if let Some(first) = cells.first() {
                if row.len() != first.len() {
                    return Err(GridError::RaggedRow {
                        row: cells.len(),
                        found: row.len(),
                        expected: first.len(),
                    });
                }
            }
            cells.push(row);
        }

        let rows = cells.len();
        let columns = cells.first().map_or(0, Vec::len);
        check_dimensions(rows, columns)?;

        let grid = Grid {
            rows,
            columns,
            cells,
        };
        for state in [Cell::Start, Cell::Goal] {
            let found = grid.count(state);
            if found != 1 {
                return Err(GridError::EndpointCount {
                    glyph: state.glyph(),
                    found,
                });
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_dimensions_outside_limits() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 51).is_err());
        assert!(Grid::new(50, 50).is_ok());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn state_at_rejects_out_of_bounds() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.state_at(Position::new(2, 1)), Ok(Cell::Empty));
        assert_eq!(
            grid.state_at(Position::new(3, 0)),
            Err(GridError::OutOfBounds {
                position: Position::new(3, 0),
                rows: 2,
                columns: 3,
            })
        );
        assert!(grid.state_at(Position::new(0, 2)).is_err());
    }

    #[test]
    fn start_and_goal_cannot_overlap() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_start(Position::new(1, 1)).unwrap();
        assert_eq!(
            grid.set_goal(Position::new(1, 1)),
            Err(GridError::StartIsGoal(Position::new(1, 1)))
        );
        assert!(grid.set_goal(Position::new(4, 1)).is_err());
    }

    #[test]
    fn neighbor_stays_in_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(grid.neighbor(origin, Direction::Up), None);
        assert_eq!(grid.neighbor(origin, Direction::Left), None);
        assert_eq!(grid.neighbor(origin, Direction::Down), Some(Position::new(0, 1)));
        assert_eq!(grid.neighbor(origin, Direction::Right), Some(Position::new(1, 0)));
        assert_eq!(grid.neighbor(Position::new(1, 1), Direction::Right), None);
    }

    #[test]
    fn obstacles_never_cover_endpoints() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_start(Position::new(0, 0)).unwrap();
        grid.set_goal(Position::new(3, 3)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        // More than the 14 empty cells: clamped.
        let placed = grid.place_obstacles(100, &mut rng);
        assert_eq!(placed, 14);
        assert_eq!(grid.count(Cell::Obstacle), 14);
        assert_eq!(grid.state_at(Position::new(0, 0)), Ok(Cell::Start));
        assert_eq!(grid.state_at(Position::new(3, 3)), Ok(Cell::Goal));
    }

    #[test]
    fn mark_path_skips_endpoints() {
        let mut grid: Grid = "R . G".parse().unwrap();
        let route = [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)];
        grid.mark_path(&route);
        assert_eq!(grid.to_string(), "R P G \n");

        grid.clear_path();
        assert_eq!(grid.count(Cell::Path), 0);
    }

    #[test]
    fn parses_rendered_layout() {
        let grid: Grid = "R . /\n. / .\n. . G\n".parse().unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.endpoints(), (Some(Position::new(0, 0)), Some(Position::new(2, 2))));
        assert_eq!(grid.state_at(Position::new(1, 1)), Ok(Cell::Obstacle));
        assert_eq!(grid.to_string().parse::<Grid>(), Ok(grid));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("R x G".parse::<Grid>(), Err(GridError::UnknownGlyph('x')));
        assert!(matches!(
            "R . G\n. .".parse::<Grid>(),
            Err(GridError::RaggedRow { row: 1, found: 2, expected: 3 })
        ));
        assert_eq!(
            "R . R G".parse::<Grid>(),
            Err(GridError::EndpointCount { glyph: 'R', found: 2 })
        );
        assert!(matches!(
            "".parse::<Grid>(),
            Err(GridError::InvalidDimensions { .. })
        ));
    }
}
