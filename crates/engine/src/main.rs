//! Treasure hunt engine - Main entry point.

use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treasurehunt_engine::api::console;
use treasurehunt_engine::infrastructure::{
    catalog_source::JsonCatalogSource, clock::SystemClock, location_access::StaticLocationAccess,
    settings::HuntConfig, simulated_geofencing::SimulatedGeofencing,
};
use treasurehunt_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "treasurehunt_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting treasure hunt engine");

    let config = HuntConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let source = JsonCatalogSource::new(&config.catalog_path);
    let catalog = source.load().await.map_err(|e| {
        tracing::error!(
            path = %source.path().display(),
            error = %e,
            "Failed to load landmark catalog"
        );
        e
    })?;

    let app = App::new(
        catalog,
        Arc::new(SimulatedGeofencing::new(config.max_geofences)),
        Arc::new(StaticLocationAccess::new(
            config.permissions_granted,
            config.location_enabled,
        )),
        Arc::new(SystemClock::new()),
    );

    let input = BufReader::new(tokio::io::stdin());
    console::run(&app, input, tokio::io::stdout()).await?;

    tracing::info!("Treasure hunt engine stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = HuntConfig::repo_root();

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
