use anyhow::Result;
use clap::{Parser, Subcommand};

/// liftbook - Workout plan tracking
#[derive(Parser)]
#[command(name = "liftbook")]
#[command(about = "Workout plans, weekly tracking and exercise logs", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = liftbook::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    liftbook::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => liftbook::server::serve(config, host, port).await,
        Commands::Migrate => liftbook::migrate::migrate(&config).await,
        Commands::Reset => liftbook::migrate::reset(&config).await,
    }
}
