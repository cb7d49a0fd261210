//! CLI entry point for postboard

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postboard")]
#[command(version)]
#[command(about = "A server-rendered posts page backed by a headless content store", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to postboard.yml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Fetch the post collection and list it
    List,

    /// Run a raw query against the content store and print the result
    Query {
        /// Query text to execute
        query: String,
    },

    /// Check that the content store is reachable
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postboard=debug,info"
    } else {
        "postboard=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = postboard::Postboard::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port, host } => {
            let mut config = app.config;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            tracing::info!(
                "Starting server at http://{}:{}",
                config.server.host,
                config.server.port
            );
            postboard::server::start(config).await?;
        }

        Commands::List => {
            postboard::commands::list::run(&app).await?;
        }

        Commands::Query { query } => {
            postboard::commands::query::run(&app, &query).await?;
        }

        Commands::Check => {
            postboard::commands::check::run(&app).await?;
        }

        Commands::Version => {
            println!("postboard version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
