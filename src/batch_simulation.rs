use crate::config::{AlgorithmKind, Config};
use crate::error::GridError;
use crate::simulation::{RunReport, Scenario, Simulation};
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use tracing::{info, warn};

const CSV_HEADER: &str = "simulation_id,algorithm,seed,rows,columns,num_obstacles,success,route_length,optimal_length,nodes_expanded,nodes_generated,search_time_us";

#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub simulation_id: usize,
    pub algorithm: &'static str,
    pub seed: u64,
    pub rows: usize,
    pub columns: usize,
    pub num_obstacles: usize,
    pub success: bool,
    pub route_length: Option<usize>,
    pub optimal_length: Option<usize>,
    pub nodes_expanded: usize,
    pub nodes_generated: usize,
    pub search_time_us: u128,
}

impl BatchResult {
    fn from_report(simulation_id: usize, report: &RunReport) -> Self {
        let statistics = &report.outcome.statistics;
        BatchResult {
            simulation_id,
            algorithm: report.algorithm,
            seed: report.scenario.seed,
            rows: report.scenario.rows,
            columns: report.scenario.columns,
            num_obstacles: report.scenario.num_obstacles,
            success: report.success(),
            route_length: report.route_length(),
            optimal_length: report.quality.map(|quality| quality.optimal_length),
            nodes_expanded: statistics.nodes_expanded,
            nodes_generated: statistics.nodes_generated,
            search_time_us: statistics.elapsed.as_micros(),
        }
    }

    /// A found route that is longer than the breadth-first optimum.
    pub fn is_suboptimal(&self) -> bool {
        matches!(
            (self.route_length, self.optimal_length),
            (Some(route), Some(optimal)) if route > optimal
        )
    }

    fn csv_row(&self) -> String {
        let optional = |value: Option<usize>| value.map_or_else(String::new, |v| v.to_string());
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.simulation_id,
            self.algorithm,
            self.seed,
            self.rows,
            self.columns,
            self.num_obstacles,
            self.success,
            optional(self.route_length),
            optional(self.optimal_length),
            self.nodes_expanded,
            self.nodes_generated,
            self.search_time_us
        )
    }
}

/// Aggregate of every run of one algorithm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmSummary {
    pub runs: usize,
    pub successes: usize,
    pub suboptimal: usize,
    pub total_route_length: usize,
    pub total_nodes_expanded: usize,
}

impl AlgorithmSummary {
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.runs as f64 * 100.0
        }
    }

    pub fn average_route_length(&self) -> f64 {
        if self.successes == 0 {
            0.0
        } else {
            self.total_route_length as f64 / self.successes as f64
        }
    }

    pub fn average_nodes_expanded(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_nodes_expanded as f64 / self.runs as f64
        }
    }
}

pub struct BatchSimulation {
    config: Config,
    results: Vec<BatchResult>,
    base_seed: u64,
}

impl BatchSimulation {
    pub fn new(config: Config) -> Result<Self, GridError> {
        config.validate()?;
        let base_seed = config.seed.unwrap_or_else(rand::random);
        Ok(BatchSimulation {
            config,
            results: Vec::new(),
            base_seed,
        })
    }

    pub fn results(&self) -> &[BatchResult] {
        &self.results
    }

    fn algorithms(&self) -> Vec<AlgorithmKind> {
        if self.config.compare {
            AlgorithmKind::value_variants().to_vec()
        } else {
            vec![self.config.algorithm]
        }
    }

    /// Runs `num_simulations` scenarios seeded `base_seed`, `base_seed + 1`, ...
    /// Every run is verified against the breadth-first optimum.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let started = Instant::now();
        let algorithms = self.algorithms();
        info!(
            simulations = self.config.num_simulations,
            base_seed = self.base_seed,
            algorithms = algorithms.len(),
            "Batch simulation started"
        );

        for simulation_id in 0..self.config.num_simulations {
            let seed = self.base_seed.wrapping_add(simulation_id as u64);
            let scenario = Scenario::from_config(&self.config, Some(seed));

            for &kind in &algorithms {
                let report = Simulation::run_scenario(&scenario, kind, true)?;
                let result = BatchResult::from_report(simulation_id, &report);
                if result.is_suboptimal() {
                    warn!(
                        algorithm = result.algorithm,
                        seed,
                        route = ?result.route_length,
                        optimal = ?result.optimal_length,
                        "Route longer than optimal"
                    );
                }
                self.results.push(result);
            }
        }

        if let Some(path) = &self.config.output_file {
            let file = File::create(path)?;
            self.write_csv(BufWriter::new(file))?;
            info!(path = %path.display(), rows = self.results.len(), "Wrote results");
        }

        info!(
            results = self.results.len(),
            elapsed = ?started.elapsed(),
            "Batch simulation completed"
        );
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", CSV_HEADER)?;
        for result in &self.results {
            writeln!(out, "{}", result.csv_row())?;
        }
        out.flush()
    }

    /// Results grouped by algorithm name.
    pub fn summarize(&self) -> FxHashMap<&'static str, AlgorithmSummary> {
        let mut summaries: FxHashMap<&'static str, AlgorithmSummary> = FxHashMap::default();
        for result in &self.results {
            let summary = summaries.entry(result.algorithm).or_default();
            summary.runs += 1;
            summary.total_nodes_expanded += result.nodes_expanded;
            if result.success {
                summary.successes += 1;
                summary.total_route_length += result.route_length.unwrap_or(0);
            }
            if result.is_suboptimal() {
                summary.suboptimal += 1;
            }
        }
        summaries
    }

    pub fn print_summary(&self) {
        if self.results.is_empty() {
            println!("No results to summarize.");
            return;
        }

        println!("\n=== BATCH SIMULATION SUMMARY ===");
        println!(
            "Grid: {}x{}, obstacles per run: {}, base seed: {}",
            self.config.rows,
            self.config.columns,
            self.config.obstacle_count(),
            self.base_seed
        );

        let summaries = self.summarize();
        let mut names: Vec<_> = summaries.keys().copied().collect();
        names.sort_unstable();

        for name in names {
            let summary = &summaries[name];
            println!("\n{} Algorithm Results:", name);
            println!(
                "  Success rate: {}/{} ({:.1}%)",
                summary.successes,
                summary.runs,
                summary.success_rate()
            );
            if summary.successes > 0 {
                println!("  Average route length: {:.1}", summary.average_route_length());
            }
            println!("  Average nodes expanded: {:.1}", summary.average_nodes_expanded());
            if summary.suboptimal == 0 {
                println!("  ✓ Every route matched the breadth-first optimum");
            } else {
                println!("  ⚠ {} routes longer than optimal", summary.suboptimal);
            }
        }
    }
}
