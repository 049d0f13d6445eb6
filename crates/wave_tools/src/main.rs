//! Wave Scheduler - Authoring Tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wave_tools::{
    loader::{default_data_dir, load_catalog_path, load_plan},
    preview::build_preview,
    sweep::{run_sweep, SweepConfig},
    validate::validate_files,
};

#[derive(Parser)]
#[command(name = "wave-tools")]
#[command(about = "Authoring tools for budget-constrained wave spawn scheduling")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a unit catalog and optionally a wave plan
    Validate {
        /// Catalog file or directory of catalogs (defaults to the data directory's catalogs)
        catalog: Option<PathBuf>,

        /// Wave plan to check against the catalog
        #[arg(short, long)]
        plan: Option<PathBuf>,
    },

    /// Build one schedule and print it
    Preview {
        /// Catalog file or directory
        #[arg(short, long)]
        catalog: PathBuf,

        /// Wave plan file
        #[arg(short, long)]
        plan: PathBuf,

        /// Seed overriding the plan's own
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build a plan over many seeds in parallel and report statistics
    Sweep {
        /// Catalog file or directory
        #[arg(short, long)]
        catalog: PathBuf,

        /// Wave plan file
        #[arg(short, long)]
        plan: PathBuf,

        /// Number of seeds to build
        #[arg(short, long, default_value = "1000")]
        runs: u32,

        /// First seed
        #[arg(long, default_value = "0")]
        seed_start: u64,

        /// Write full results to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let ok = match cli.command {
        Commands::Validate { catalog, plan } => cmd_validate(catalog, plan.as_deref()),
        Commands::Preview {
            catalog,
            plan,
            seed,
            json,
        } => cmd_preview(&catalog, &plan, seed, json),
        Commands::Sweep {
            catalog,
            plan,
            runs,
            seed_start,
            output,
        } => cmd_sweep(&catalog, &plan, runs, seed_start, output.as_deref()),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn cmd_validate(catalog: Option<PathBuf>, plan: Option<&Path>) -> bool {
    let Some(catalog) = catalog.or_else(|| default_data_dir().map(|d| d.join("catalogs"))) else {
        tracing::error!("No catalog given and no data directory found");
        return false;
    };

    tracing::info!("Validating {}", catalog.display());
    match validate_files(&catalog, plan) {
        Ok(report) if report.is_ok() => {
            tracing::info!("Validation passed");
            true
        }
        Ok(report) => {
            for error in report.errors() {
                tracing::error!("{error}");
            }
            tracing::error!("Validation failed");
            false
        }
        Err(e) => {
            tracing::error!("Validation failed: {e}");
            false
        }
    }
}

fn cmd_preview(catalog: &Path, plan: &Path, seed: Option<u64>, json: bool) -> bool {
    let loaded = load_catalog_path(catalog).and_then(|c| Ok((c, load_plan(plan)?)));
    let (catalog, plan) = match loaded {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Failed to load data: {e}");
            return false;
        }
    };

    let report = match build_preview(&catalog, &plan, seed) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Failed to build schedule: {e}");
            return false;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                tracing::error!("Failed to encode report: {e}");
                return false;
            }
        }
    } else {
        print!("{}", report.render_table());
    }
    true
}

fn cmd_sweep(
    catalog: &Path,
    plan: &Path,
    runs: u32,
    seed_start: u64,
    output: Option<&Path>,
) -> bool {
    let loaded = load_catalog_path(catalog).and_then(|c| Ok((c, load_plan(plan)?)));
    let (catalog, plan) = match loaded {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Failed to load data: {e}");
            return false;
        }
    };

    let config = SweepConfig::new(runs).with_seed(seed_start);
    let results = match run_sweep(&catalog, &plan, config) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Sweep failed: {e}");
            return false;
        }
    };

    match serde_json::to_string_pretty(&results.summary) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            tracing::error!("Failed to encode summary: {e}");
            return false;
        }
    }

    if let Some(path) = output {
        if let Err(e) = results.save(path) {
            tracing::error!(error = %e, path = %path.display(), "Failed to save results");
            return false;
        }
        tracing::info!("Results saved to {}", path.display());
    }
    true
}
