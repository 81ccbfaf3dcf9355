//! workq CLI - builds a task queue and drains it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use workq_core::{lifetime, TaskQueue};
use workq_runner::{Plan, QueueRunner, RunnerConfig};

#[derive(Parser)]
#[command(name = "workq")]
#[command(about = "In-process unit-of-work queue", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the queue and drain it
    Run {
        /// JSON plan file (defaults to the demo plan)
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Stop after this many tasks
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Print the demo plan as JSON
    Plan,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &directives))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { plan, max_steps } => {
            let plan = match plan {
                Some(path) => load_plan(&path)?,
                None => Plan::demo(),
            };

            let queue = TaskQueue::new();
            let pushed = plan.populate(&queue).context("Failed to build task queue")?;
            debug!("Queued {} task(s)", pushed);

            println!("Number of objects = {}", lifetime::count());

            let mut runner = QueueRunner::new().with_config(RunnerConfig { max_steps });
            let report = runner.run(&queue)?;

            for description in &report.descriptions {
                println!("{}", description);
            }

            drop(queue);
            println!("Alive objects = {}", lifetime::count());
        }
        Commands::Plan => {
            println!("{}", Plan::demo().to_json_pretty()?);
        }
    }

    Ok(())
}

fn load_plan(path: &std::path::Path) -> Result<Plan> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan {}", path.display()))?;
    Plan::from_json(&json).with_context(|| format!("Invalid plan {}", path.display()))
}

/// `RUST_LOG` directives win; otherwise INFO, or DEBUG with `--verbose`.
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives)
}
