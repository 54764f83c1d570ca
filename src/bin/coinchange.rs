use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;

use coinchange::commands::{self, SolveOptions};
use coinchange::{Config, Result};

/// Compare greedy and dynamic-programming coin change
#[derive(Debug, Parser)]
#[command(name = "coinchange", version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one amount with both algorithms
    Solve {
        /// Amount to form
        #[arg(short, long)]
        amount: String,

        /// Comma-separated denominations, e.g. "1,5,10,25"
        #[arg(short = 'k', long)]
        coins: String,

        /// Print the step trace of each algorithm
        #[arg(short, long)]
        trace: bool,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,

        /// Record the comparison in this history file
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// List amounts where greedy is not optimal
    Sweep {
        /// Comma-separated denominations
        #[arg(short = 'k', long)]
        coins: String,

        /// Largest amount to check (defaults to the canonicity window)
        #[arg(short, long)]
        up_to: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Show recorded comparisons
    History {
        /// History file written by `solve --history`
        #[arg(long)]
        history: PathBuf,
    },
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Solve {
            amount,
            coins,
            trace,
            json,
            history,
        } => {
            let options = SolveOptions {
                trace,
                json,
                history: history.as_deref(),
            };
            commands::solve(&mut out, &config, &amount, &coins, options)?;
        }
        Command::Sweep { coins, up_to, json } => {
            commands::sweep(&mut out, &config, &coins, up_to, json)?;
        }
        Command::History { history } => {
            commands::history(&mut out, &history)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(Config::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("coinchange: {}", err);
            return ExitCode::FAILURE;
        }
    };
    config.logging.init();
    debug!("running with {:?}", config);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("coinchange: {}", err);
            ExitCode::FAILURE
        }
    }
}
