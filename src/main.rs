// caselog entry point
//
// Default invocation runs the interactive terminal client against
// DATABASE_URL; `caselog serve` runs the validation HTTP service that
// the client consults before every create.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use caselog_server::gateway::NotesGateway;
use caselog_server::service;
use caselog_server::store::PgNotesStore;
use caselog_server::validation::{FallbackValidator, ValidatorConfig};

#[derive(Parser)]
#[clap(name = "caselog", version, about = "Session note keeping for therapy practices")]
struct Cli {
    /// PostgreSQL connection string for the session_notes table
    #[clap(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Validation service endpoint; the built-in rule takes over when it
    /// is unreachable
    #[clap(long, env = "CASELOG_VALIDATOR_URL")]
    validator_url: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the validation HTTP service
    Serve {
        /// Listen address
        #[clap(long, default_value_t = service::DEFAULT_LISTEN)]
        listen: std::net::SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve { listen }) => {
            service::serve(listen)
                .await
                .context("validation service failed")?;
        }
        None => {
            let database_url = cli
                .database_url
                .context("DATABASE_URL is required (or pass --database-url)")?;
            let store = PgNotesStore::connect(&database_url)
                .await
                .context("failed to open the session_notes store")?;

            let endpoint = cli.validator_url.unwrap_or_else(|| {
                format!("http://{}/validate-session-note", service::DEFAULT_LISTEN)
            });
            let validator = FallbackValidator::remote_with_local(ValidatorConfig {
                endpoint,
                ..ValidatorConfig::default()
            });

            let gateway = NotesGateway::new(Arc::new(store), Arc::new(validator));
            caselog_client::run(gateway).await?;
        }
    }

    Ok(())
}
