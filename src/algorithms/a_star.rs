//! Hand-written A* over a [`Grid`].
//!
//! f(n) = g(n) + h(n), where g counts unit steps from the start and h is the
//! Manhattan distance to the goal. With four-way unit moves the heuristic is
//! admissible and consistent, so the first time the goal leaves the frontier
//! its route is a shortest one.

use crate::algorithms::common::{PathfindingAlgorithm, Route, SearchOutcome};
use crate::algorithms::frontier::Frontier;
use crate::algorithms::node::{NodeArena, SearchNode};
use crate::error::SearchError;
use crate::grid::{Cell, Direction, Grid, Position};
use crate::statistics::SearchStatistics;
use std::time::Instant;
use tracing::{debug, trace};

pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u32
}

/// Closed positions, one flag per cell.
struct VisitedSet {
    columns: usize,
    flags: Vec<bool>,
}

impl VisitedSet {
    fn new(rows: usize, columns: usize) -> Self {
        VisitedSet {
            columns,
            flags: vec![false; rows * columns],
        }
    }

    fn insert(&mut self, pos: Position) {
        self.flags[pos.y * self.columns + pos.x] = true;
    }

    fn contains(&self, pos: Position) -> bool {
        self.flags[pos.y * self.columns + pos.x]
    }
}

/// A* search engine.
///
/// The neighbor order only decides which of several equally short routes is
/// returned; the default is Down, Up, Right, Left.
#[derive(Debug, Clone)]
pub struct AStar {
    neighbor_order: [Direction; 4],
}

impl Default for AStar {
    fn default() -> Self {
        AStar {
            neighbor_order: Direction::ALL,
        }
    }
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighbor_order(neighbor_order: [Direction; 4]) -> Self {
        AStar { neighbor_order }
    }

    /// Finds a shortest route from the start cell to the goal cell.
    ///
    /// On success every cell of the route except the start and the goal is
    /// set to [`Cell::Path`]. When the frontier runs dry the grid is left
    /// as it was and the outcome carries no route.
    pub fn search(&self, grid: &mut Grid) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        let (start, goal) = match grid.endpoints() {
            (Some(start), Some(goal)) => (start, goal),
            (None, _) => return Err(SearchError::MissingStart),
            (_, None) => return Err(SearchError::MissingGoal),
        };

        let (rows, columns) = grid.dimensions();
        let mut frontier = Frontier::with_capacity(rows * columns);
        let mut visited = VisitedSet::new(rows, columns);
        let mut arena = NodeArena::with_capacity(rows * columns);
        let mut statistics = SearchStatistics::default();

        debug!(%start, %goal, rows, columns, "Starting A* search");

        frontier.insert(SearchNode::new(start, None, 0, manhattan_distance(start, goal)));
        statistics.record_generated(frontier.len());

        while !frontier.is_empty() {
            let current = frontier.extract_min()?;
            statistics.nodes_expanded += 1;

            if current.position == goal {
                let positions = arena.route_to(&current);
                grid.mark_path(&positions);
                statistics.elapsed = started.elapsed();
                debug!(
                    cost = current.cost,
                    expanded = statistics.nodes_expanded,
                    generated = statistics.nodes_generated,
                    "Goal reached"
                );
                return Ok(SearchOutcome {
                    route: Some(Route {
                        positions,
                        cost: current.cost,
                    }),
                    statistics,
                });
            }

            visited.insert(current.position);
            let current_id = arena.alloc(current);
            trace!(position = %current.position, f = current.f_score(), "Expanding node");

            for &direction in &self.neighbor_order {
                let Some(next) = grid.neighbor(current.position, direction) else {
                    continue;
                };
                if matches!(grid.state_at(next), Ok(Cell::Obstacle)) || visited.contains(next) {
                    continue;
                }
                frontier.insert(SearchNode::new(
                    next,
                    Some(current_id),
                    current.cost + 1,
                    manhattan_distance(next, goal),
                ));
                statistics.record_generated(frontier.len());
            }
        }

        statistics.elapsed = started.elapsed();
        debug!(
            expanded = statistics.nodes_expanded,
            generated = statistics.nodes_generated,
            "Frontier exhausted, goal unreachable"
        );
        Ok(SearchOutcome {
            route: None,
            statistics,
        })
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn find_path(&mut self, grid: &mut Grid) -> Result<SearchOutcome, SearchError> {
        self.search(grid)
    }
}
