mod config;
mod languages;
mod provider;
mod quality;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("tercuman_backend=debug,tower_http=debug")
        .init();

    // Config path from env, falling back to conf.yaml next to the binary
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        exe_dir
            .join("conf.yaml")
            .canonicalize()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string())),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    let mut loaded_path = String::new();

    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                config = Some(cfg);
                loaded_path = path.clone();
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let config = config.ok_or_else(|| {
        anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths)
    })?;

    info!("Loaded configuration from: {}", loaded_path);

    let app_state = AppState::new(config.clone());

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.system_config.host, config.system_config.port)
        .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
