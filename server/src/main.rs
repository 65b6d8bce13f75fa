use anyhow::Result;
use server::http;
use server::storage::{CustomerStore, JsonFileStore, StorageConfig};
use std::{net::SocketAddr, sync::Arc};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    info!("Starting customer-api server");

    let config = StorageConfig::from_env();
    let StorageConfig::Local { path } = &config;
    std::fs::create_dir_all(path)?;
    info!("Using storage path: {}", path.display());

    let store = JsonFileStore::from_config(config)?;

    // A fresh install has no collection file yet; seed an empty one so
    // reads work immediately.
    if !store.exists().await? {
        info!("No collection file found, seeding an empty collection");
        store.save(&[]).await?;
    }

    let store: Arc<dyn CustomerStore> = Arc::new(store);

    let addr = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse::<SocketAddr>()?;

    http::start_server(store, addr).await?;

    Ok(())
}
