//! kiraya CLI - Monthly house rent estimates from comparable listings.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::estimate::PropertyInput;
use display::OutputFormat;

#[derive(Parser)]
#[command(name = "kiraya")]
#[command(about = "Estimate monthly house rent from comparable listings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Reference dataset file (.json or .csv). Defaults to the built-in sample.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Estimator config file (JSON). Defaults to the platform config file if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the monthly rent of a property
    Estimate {
        /// State (e.g., "Karnataka")
        #[arg(long)]
        state: Option<String>,

        /// City (e.g., "Bangalore")
        #[arg(long)]
        city: Option<String>,

        /// Locality, shown in the summary only
        #[arg(long)]
        location: Option<String>,

        /// Size in square feet
        #[arg(long)]
        size: Option<f64>,

        /// Number of bedrooms
        #[arg(long, default_value = "1")]
        bedrooms: u32,

        /// Number of bathrooms
        #[arg(long, default_value = "1")]
        bathrooms: u32,

        /// Number of parking spaces
        #[arg(long, default_value = "0")]
        parking: u32,

        /// Prompt for every field
        #[arg(short, long)]
        interactive: bool,

        /// List the comparable records behind the estimate
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List supported states and cities
    States {
        /// Search pattern matched against state and city names
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the reference dataset and its averages
    Dataset {
        /// Only show records for this state
        #[arg(long)]
        state: Option<String>,
    },

    /// Print the effective estimator configuration
    Config,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v` unless `--quiet` is set.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            state,
            city,
            location,
            size,
            bedrooms,
            bathrooms,
            parking,
            interactive,
            explain,
            format,
        } => {
            let input = PropertyInput {
                state,
                city,
                location,
                size,
                bedrooms,
                bathrooms,
                parking,
            };
            commands::estimate::estimate(
                input,
                interactive,
                cli.dataset.as_deref(),
                cli.config.as_deref(),
                explain,
                format,
            )
            .await
        }
        Commands::States { search } => commands::states::list_states(search.as_deref()),
        Commands::Dataset { state } => {
            commands::dataset::show_dataset(cli.dataset.as_deref(), state.as_deref()).await
        }
        Commands::Config => commands::config::show_config(cli.config.as_deref()),
    }
}
