use crate::error::SearchError;
use crate::grid::{Grid, Position};
use crate::statistics::SearchStatistics;

/// A route from the start cell to the goal cell, both included, in the
/// order the robot travels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub positions: Vec<Position>,
    pub cost: u32,
}

impl Route {
    /// Number of moves, one less than the number of positions.
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

/// Result of one search. `route` is `None` when the goal is unreachable,
/// which is a normal outcome rather than an error.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub route: Option<Route>,
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.route.is_some()
    }
}

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    /// Searches from the grid's start cell to its goal cell.
    ///
    /// On success the interior cells of the route are marked as `Path`;
    /// when no route exists the grid is left untouched.
    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchOutcome, SearchError>;
}
