use crate::algorithms::{create_algorithm, shortest_path_length, SearchOutcome};
use crate::config::{AlgorithmKind, Config};
use crate::error::{GridError, SimulationError};
use crate::grid::{Cell, Grid, Position};
use crate::path::{collect_path_coordinates, PathDirections};
use crate::statistics::RouteQuality;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Everything needed to rebuild the same grid again.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub rows: usize,
    pub columns: usize,
    pub start: Position,
    pub goal: Position,
    pub num_obstacles: usize,
    pub seed: u64,
}

impl Scenario {
    /// Reads the layout from `config`; a missing seed is drawn at random so
    /// the run can still be reproduced from the log.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Self {
        Scenario {
            rows: config.rows,
            columns: config.columns,
            start: config.start(),
            goal: config.goal(),
            num_obstacles: config.obstacle_count(),
            seed: seed.unwrap_or_else(rand::random),
        }
    }

    /// Builds the grid: start and goal first, then obstacles on the
    /// remaining empty cells.
    pub fn create_grid(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.rows, self.columns)?;
        grid.set_start(self.start)?;
        grid.set_goal(self.goal)?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let placed = grid.place_obstacles(self.num_obstacles, &mut rng);
        debug!(seed = self.seed, placed, "Generated grid");
        Ok(grid)
    }
}

/// What one run produced, ready to be printed.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: &'static str,
    pub scenario: Scenario,
    pub grid: Grid,
    pub outcome: SearchOutcome,
    pub coordinates: Vec<Position>,
    pub directions: PathDirections,
    pub quality: Option<RouteQuality>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn route_length(&self) -> Option<usize> {
        self.outcome.route.as_ref().map(|route| route.steps())
    }

    pub fn print(&self, show_grid: bool) {
        if show_grid {
            println!("Obstacles are indicated with '{}'", Cell::Obstacle.glyph());
            println!("Robot is indicated with '{}'", Cell::Start.glyph());
            println!("Goal position is indicated with '{}'", Cell::Goal.glyph());
            println!("Path followed by the robot is indicated with '{}'", Cell::Path.glyph());
            println!();
            print!("{}", self.grid);
        }

        println!("\nRobot moved through the cells in this order: ");
        if self.success() {
            // Empty when start and goal are neighbors.
            print!("{}", self.directions);
        } else {
            println!("No path as there are too many obstacles.");
        }

        if let Some(quality) = &self.quality {
            println!();
            print!("{}", quality);
        }
    }
}

pub struct Simulation {
    config: Config,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Simulation { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the configured scenario and runs the configured algorithm.
    pub fn run(&self) -> Result<RunReport, SimulationError> {
        let scenario = Scenario::from_config(&self.config, self.config.seed);
        let verify = self.config.verify;
        Self::run_scenario(&scenario, self.config.algorithm, verify)
    }

    /// Runs one algorithm on a freshly built copy of `scenario`.
    pub fn run_scenario(
        scenario: &Scenario,
        kind: AlgorithmKind,
        verify: bool,
    ) -> Result<RunReport, SimulationError> {
        let mut grid = scenario.create_grid()?;
        let optimal_length = if verify {
            shortest_path_length(&grid)
        } else {
            None
        };

        let mut algorithm = create_algorithm(kind);
        let outcome = algorithm.find_path(&mut grid)?;

        let coordinates = collect_path_coordinates(&grid);
        let directions = PathDirections::from_coordinates(&coordinates);

        let quality = match (&outcome.route, optimal_length) {
            (Some(route), Some(optimal_length)) => Some(RouteQuality {
                route_length: route.steps(),
                optimal_length,
            }),
            _ => None,
        };

        match &outcome.route {
            Some(route) => info!(
                algorithm = algorithm.name(),
                seed = scenario.seed,
                steps = route.steps(),
                expanded = outcome.statistics.nodes_expanded,
                "Route found"
            ),
            None => info!(
                algorithm = algorithm.name(),
                seed = scenario.seed,
                expanded = outcome.statistics.nodes_expanded,
                "No route to goal"
            ),
        }

        Ok(RunReport {
            algorithm: algorithm.name(),
            scenario: scenario.clone(),
            grid,
            outcome,
            coordinates,
            directions,
            quality,
        })
    }
}
