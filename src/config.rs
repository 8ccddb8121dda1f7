use crate::error::GridError;
use crate::grid::{check_dimensions, Position};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Hand-written binary-heap A*
    AStar,
    /// A* from the pathfinding crate, for cross-checking
    Reference,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::AStar => f.write_str("a_star"),
            AlgorithmKind::Reference => f.write_str("reference"),
        }
    }
}

/// Shortest robot route on a grid with random obstacles.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of grid rows (1-50)
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Number of grid columns (1-50)
    #[arg(long, default_value_t = 10)]
    pub columns: usize,

    #[arg(long, default_value_t = 0)]
    pub start_row: usize,

    #[arg(long, default_value_t = 0)]
    pub start_column: usize,

    /// Defaults to the last row
    #[arg(long)]
    pub goal_row: Option<usize>,

    /// Defaults to the last column
    #[arg(long)]
    pub goal_column: Option<usize>,

    /// Share of all cells turned into obstacles
    #[arg(long, default_value_t = 0.3)]
    pub obstacle_ratio: f64,

    /// Seed for obstacle placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = AlgorithmKind::AStar)]
    pub algorithm: AlgorithmKind,

    /// Compare the route length with a breadth-first optimum
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Run many seeded scenarios and print a summary
    #[arg(long, default_value_t = false)]
    pub batch_mode: bool,

    #[arg(long, default_value_t = 100)]
    pub num_simulations: usize,

    /// In batch mode, run every algorithm on each scenario
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// In batch mode, write one CSV row per run to this file
    #[arg(long)]
    pub output_file: Option<PathBuf>,
}

impl Config {
    pub fn start(&self) -> Position {
        Position::new(self.start_column, self.start_row)
    }

    pub fn goal(&self) -> Position {
        Position::new(
            self.goal_column.unwrap_or(self.columns.saturating_sub(1)),
            self.goal_row.unwrap_or(self.rows.saturating_sub(1)),
        )
    }

    /// Number of obstacles to place, before clamping to the free cells.
    pub fn obstacle_count(&self) -> usize {
        (self.obstacle_ratio * (self.rows * self.columns) as f64) as usize
    }

    /// Rejects settings that would produce an invalid grid, before anything
    /// is built.
    pub fn validate(&self) -> Result<(), GridError> {
        check_dimensions(self.rows, self.columns)?;

        for pos in [self.start(), self.goal()] {
            if pos.x >= self.columns || pos.y >= self.rows {
                return Err(GridError::OutOfBounds {
                    position: pos,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
        }
        if self.start() == self.goal() {
            return Err(GridError::StartIsGoal(self.start()));
        }
        if !(0.0..=1.0).contains(&self.obstacle_ratio) {
            return Err(GridError::InvalidObstacleRatio(self.obstacle_ratio));
        }
        Ok(())
    }
}
