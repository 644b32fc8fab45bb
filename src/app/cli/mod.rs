//! CLI Adapter.

mod setup;
mod stack;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "n8n-setup")]
#[command(version)]
#[command(
    about = "Compose and deploy an n8n container stack with optional services",
    long_about = None
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .env and docker-compose.yml, then start the stack
    #[clap(visible_alias = "s")]
    Setup(setup::SetupArgs),
    /// List available features
    #[clap(visible_alias = "ls")]
    List {
        /// Show detailed info for a specific feature
        #[arg(long)]
        detail: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show running services of the generated stack
    Status(stack::StackDirArgs),
    /// Show container logs of the generated stack
    Logs {
        /// Service to show logs for (all services when omitted)
        service: Option<String>,
        /// Follow log output
        #[arg(short, long)]
        follow: bool,
        #[command(flatten)]
        dir: stack::StackDirArgs,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Setup(args) => setup::run_setup(args),
        Commands::List { detail, json } => stack::run_list(detail, json),
        Commands::Status(dir) => stack::run_status(dir),
        Commands::Logs { service, follow, dir } => stack::run_logs(service, follow, dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
