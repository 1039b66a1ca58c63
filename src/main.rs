use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use oynaiq::catalog::{seed_matches, MatchStore};
use oynaiq::config::{Config, TOKEN_ENV_VAR};
use oynaiq::dispatch::DispatchLayer;
use oynaiq::logging::init_tracing;
use oynaiq::router::{Router, Sender};
use oynaiq::transport::{ConsoleTransport, TelegramTransport};

/// OynaIQ bot: find a team or organise a match.
#[derive(Parser)]
#[command(name = "oynaiq", version)]
struct Cli {
    /// Config file (default: <config dir>/oynaiq/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chat on stdin/stdout instead of connecting to Telegram
    #[arg(long)]
    console: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let store = MatchStore::new(seed_matches());
    tracing::info!(matches = store.len(), "Match store seeded");

    let router = Arc::new(Router::from_config(&config, Arc::new(store)));
    let (client, dispatcher) = DispatchLayer::new(router);
    let dispatcher_task = tokio::spawn(dispatcher.run());

    let transport = async {
        if cli.console {
            let sender = Sender {
                user_id: 1,
                username: Some("console".to_string()),
            };
            ConsoleTransport::new(client, sender).run().await?;
        } else {
            let token = config.resolve_token(std::env::var(TOKEN_ENV_VAR).ok())?;
            TelegramTransport::new(&config.telegram, &token, client)?
                .run()
                .await?;
        }
        Ok::<(), anyhow::Error>(())
    };

    tokio::select! {
        result = transport => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Ctrl-C received, shutting down"),
    }

    dispatcher_task.abort();
    Ok(())
}
