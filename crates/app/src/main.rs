//! Drivetest - Main Entry Point
//!
//! Command line front end for the driving tests quiz server. Wires
//! configuration, logging and the HTTP adapter into the use cases and
//! prints the results.

mod render;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use drivetest_application::{CheckAnswer, FetchTest, HealthCheck};
use drivetest_domain::{ClientConfig, Identifier};
use drivetest_infrastructure::{ConfigLoader, ReqwestHttpClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "drivetest", version, about = "Client for the driving tests quiz server")]
struct Cli {
    /// Base URL of the quiz server, overrides DRIVETEST_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, global = true)]
    insecure: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a random test
    Test {
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit an answer and print the verdict
    Check {
        /// Identifier of the test
        test_id: Identifier,
        /// Identifier of the chosen answer
        answer_id: Identifier,
    },
    /// Ask the server whether it is up
    Health,
}

fn client_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::new().load()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
        config.base()?;
    }
    if cli.insecure {
        config.accept_invalid_certs = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = client_config(&cli)?;
    let client = Arc::new(ReqwestHttpClient::new(&config)?);

    tracing::debug!(base_url = %config.base_url, "drivetest v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Test { json } => {
            let test = FetchTest::new(client, config).execute().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&test)?);
            } else {
                print!("{}", render::render_test(&test));
            }
        }
        Command::Check { test_id, answer_id } => {
            let check = CheckAnswer::new(client, config)
                .check(test_id, answer_id)
                .await?;
            println!("{}", render::render_check(&check));
        }
        Command::Health => {
            let status = HealthCheck::new(client, config).execute().await?;
            println!("{}", render::render_health(&status));
        }
    }

    Ok(())
}
