mod agent;
mod config;
mod errors;
mod models;
mod prompts;
mod routes;
mod seed;
mod service;

use std::sync::Arc;

use tracing::{info, warn};

use crate::agent::GeminiClient;
use crate::config::{Config, SeedCachePolicy};
use crate::seed::SeedHistoryProvider;
use crate::service::relay_service::RelayService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hoppers_hub_ai=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = Config::from_env()?;

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let gemini = GeminiClient::new(&config);
    info!("Relaying to {}", gemini.endpoint());

    let seeds = SeedHistoryProvider::new(config.reference_docs.clone(), config.seed_cache);
    match seeds.policy() {
        SeedCachePolicy::PerRequest => info!("Seed history is rebuilt from disk on every request"),
        SeedCachePolicy::PerProcess => {
            let seed = seeds.seed_history().await;
            if seed.is_complete() {
                info!("Seed history cached for the process lifetime");
            } else {
                warn!("Seed history incomplete at startup; it will be rebuilt until all documents load");
            }
        }
    }

    let relay = RelayService::new(seeds, Arc::new(gemini), config.safety_settings);

    // ── Router ────────────────────────────────────────────────────────────────
    let app = routes::router(relay, config.static_dir.as_deref());

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
