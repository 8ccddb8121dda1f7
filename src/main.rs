use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use robot_grid::batch_simulation::BatchSimulation;
use robot_grid::config::Config;
use robot_grid::simulation::Simulation;

fn init_logging(quiet: bool) {
    let default_level = if quiet { "robot_grid=warn" } else { "robot_grid=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.quiet);

    if !config.quiet {
        println!("Grid size: {}x{}", config.rows, config.columns);
        println!("Start: {}, Goal: {}", config.start(), config.goal());
        println!(
            "Obstacles: {} ({:.0}% of cells)",
            config.obstacle_count(),
            config.obstacle_ratio * 100.0
        );
        println!("Algorithm: {}", config.algorithm);
        println!();
    }

    if config.batch_mode {
        let quiet = config.quiet;
        let mut batch = BatchSimulation::new(config).context("invalid batch configuration")?;
        batch.run().context("batch simulation failed")?;
        if !quiet {
            batch.print_summary();
        }
        return Ok(());
    }

    let simulation = Simulation::new(config).context("invalid grid configuration")?;
    let report = simulation.run().context("simulation failed")?;
    report.print(!simulation.config().no_visualization);

    if !simulation.config().quiet {
        println!("\n=== SEARCH STATISTICS ===");
        println!("Seed: {}", report.scenario.seed);
        print!("{}", report.outcome.statistics);
    }

    Ok(())
}
