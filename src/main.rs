use std::sync::Arc;

use anyhow::{Context, Result};
use bapsang::{
    config::Config,
    gemini::GeminiClient,
    routes::{self, AppState},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    /// The address and port to bind to, overriding PORT from the environment
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args = Args::parse();

    // One immutable configuration object, built once and passed down. The API
    // credential lives here and nowhere else.
    let config = Config::from_env().context("Loading configuration")?;
    let address = args
        .address
        .unwrap_or_else(|| format!("0.0.0.0:{}", config.port));

    let app = routes::router(AppState {
        generator: Arc::new(GeminiClient::new(&config)),
    });

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Binding to {address}"))?;
    tracing::info!("Listening on {}", address);
    axum::serve(listener, app).await?;
    Ok(())
}
