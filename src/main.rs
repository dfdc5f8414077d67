//! Binary entry point: argument handling, logging setup, session run.

use tracing::error;
use tracing_subscriber::EnvFilter;

use slirc_bot::{Client, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        let program = args.first().map(String::as_str).unwrap_or("slirc-bot");
        println!("Usage: {program} <server> <port> <nick> <channel (without #)>.");
        return Ok(());
    }

    let config = Config::from_args(&args[1], &args[2], &args[3], &args[4]);
    let client = Client::connect(config).await.map_err(|e| {
        error!(error = %e, "connection failed");
        e
    })?;
    client.run().await.map_err(|e| {
        error!(error = %e, "session ended");
        e
    })?;
    Ok(())
}
