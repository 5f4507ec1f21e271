use crate::commands::{check, clean, env, init, status, tag};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "grove-harness",
    about = "Drive deterministic end-to-end runs of the grove CLI.",
    version = crate::version::HARNESS_VERSION
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default harness.json at the harness root
    Init(init::InitArgs),

    /// Show the resolved harness state
    Status,

    /// Assert the pinned grove binary is installed and reports the pinned version
    Check(check::CheckArgs),

    /// Remove the scratch workspace directories
    Clean(clean::CleanArgs),

    /// Print the environment assignments for a simulated day
    Env(env::EnvArgs),

    /// Print a random workspace tag
    Tag,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init(args) => init::run(args),
        Commands::Status => status::run(),
        Commands::Check(args) => check::run(args).await,
        Commands::Clean(args) => clean::run(args).await,
        Commands::Env(args) => env::run(args),
        Commands::Tag => tag::run(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("grove_harness=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
