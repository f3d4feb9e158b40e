use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "exercises")]
#[command(about = "Runs client use cases against recording test doubles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Enable verbose debug output")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run a scenario file and print its report as JSON")]
    Run {
        #[arg(help = "Path to a YAML scenario")]
        path: PathBuf,

        #[arg(long, help = "Pretty-print the JSON report")]
        pretty: bool,
    },

    #[command(about = "List the use cases a scenario can name")]
    List,

    #[command(subcommand)]
    Check(CheckCommands),
}

#[derive(Subcommand)]
enum CheckCommands {
    #[command(about = "Check whether a number is negative")]
    Negative {
        #[arg(allow_hyphen_values = true)]
        number: i32,
    },

    #[command(about = "Duplicate a string")]
    Duplicate { input: String },

    #[command(about = "Check whether two intervals are adjacent")]
    Adjacent {
        #[arg(allow_hyphen_values = true)]
        a_start: i32,
        #[arg(allow_hyphen_values = true)]
        a_end: i32,
        #[arg(allow_hyphen_values = true)]
        b_start: i32,
        #[arg(allow_hyphen_values = true)]
        b_end: i32,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli::Config {
        verbose: cli.verbose,
        pretty: matches!(cli.command, Commands::Run { pretty: true, .. }),
    };

    match cli.command {
        Commands::Run { path, .. } => {
            cli::run_scenario(&path, &config)?;
        }
        Commands::List => {
            cli::list(&config);
        }
        Commands::Check(check_cmd) => match check_cmd {
            CheckCommands::Negative { number } => {
                cli::check_negative(number);
            }
            CheckCommands::Duplicate { input } => {
                cli::check_duplicate(&input);
            }
            CheckCommands::Adjacent {
                a_start,
                a_end,
                b_start,
                b_end,
            } => {
                cli::check_adjacent((a_start, a_end), (b_start, b_end))?;
            }
        },
    }

    Ok(())
}
