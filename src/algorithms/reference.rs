use crate::algorithms::a_star::manhattan_distance;
use crate::algorithms::common::{PathfindingAlgorithm, Route, SearchOutcome};
use crate::error::SearchError;
use crate::grid::{Cell, Direction, Grid, Position};
use crate::statistics::SearchStatistics;
use pathfinding::prelude::{astar, bfs};
use std::time::Instant;

/// Cross-check planner backed by the `pathfinding` crate.
#[derive(Default)]
pub struct ReferenceAStar;

impl ReferenceAStar {
    pub fn new() -> Self {
        ReferenceAStar
    }
}

/// Orthogonal neighbors of `pos` that are inside the grid and not obstacles.
fn open_neighbors(grid: &Grid, pos: Position) -> Vec<Position> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| grid.neighbor(pos, direction))
        .filter(|&next| !matches!(grid.state_at(next), Ok(Cell::Obstacle)))
        .collect()
}

fn require_endpoints(grid: &Grid) -> Result<(Position, Position), SearchError> {
    match grid.endpoints() {
        (Some(start), Some(goal)) => Ok((start, goal)),
        (None, _) => Err(SearchError::MissingStart),
        (_, None) => Err(SearchError::MissingGoal),
    }
}

impl PathfindingAlgorithm for ReferenceAStar {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        let (start, goal) = require_endpoints(grid)?;
        let mut statistics = SearchStatistics::default();

        let layout: &Grid = grid;
        let result = astar(
            &start,
            |p| {
                let successors = open_neighbors(layout, *p);
                statistics.nodes_expanded += 1;
                statistics.nodes_generated += successors.len();
                // Cost of moving to a neighbor is 1.
                successors.into_iter().map(|next| (next, 1u32))
            },
            |p| manhattan_distance(*p, goal),
            |p| *p == goal,
        );
        statistics.elapsed = started.elapsed();

        let route = result.map(|(positions, cost)| Route { positions, cost });
        if let Some(route) = &route {
            grid.mark_path(&route.positions);
        }
        Ok(SearchOutcome { route, statistics })
    }
}

/// Length in steps of a shortest start-to-goal route, found by breadth-first
/// search. `None` when either endpoint is missing or the goal is unreachable.
pub fn shortest_path_length(grid: &Grid) -> Option<usize> {
    let (start, goal) = require_endpoints(grid).ok()?;
    bfs(&start, |p| open_neighbors(grid, *p), |p| *p == goal).map(|path| path.len() - 1)
}
