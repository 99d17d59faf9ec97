mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use waitlist_core::WaitlistConfig;

#[derive(Parser)]
#[command(name = "waitlist")]
#[command(about = "Email waitlist backend for product landing pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create or update the PostgreSQL schema at DATABASE_URL
    Migrate,
    /// Submit one email through the signup form and print the notice
    Signup { email: String },
    /// Record one page view
    Visit {
        page_url: String,
        #[arg(short = 'a', long, default_value = "")]
        user_agent: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WaitlistConfig::from_env()?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, &host, port).await,
        Commands::Migrate => commands::migrate::run(&config).await,
        Commands::Signup { email } => commands::signup::run(&config, email).await,
        Commands::Visit { page_url, user_agent } => {
            commands::visit::run(&config, page_url, user_agent).await
        },
    }
}
