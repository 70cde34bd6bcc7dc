use anyhow::Result;
use log::info;
use std::sync::Arc;

use alert_forwarder::{AppState, DiscordForwarder, ServerConfig, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("🚀 Starting alert forwarder");

    let config = match ServerConfig::from_file("config.toml") {
        Ok(config) => {
            info!("✅ Loaded configuration from config.toml");
            config
        }
        Err(e) => {
            info!("Failed to load config: {}. Using default configuration.", e);
            ServerConfig::default()
        }
    };

    let auth_token = config.resolve_token()?;
    let forwarder = DiscordForwarder::new(config.discord_base_url.clone())?;
    let state = AppState {
        auth_token,
        forwarder,
    };

    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("🌐 Alert forwarder listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
