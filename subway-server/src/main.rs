use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_server::config::AppConfig;
use subway_server::service::SubwayService;
use subway_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "subway_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Build app state
    let service = SubwayService::in_memory(config.finder);
    let state = AppState::new(service);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.addr);
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, finder = %config.finder, "subway server listening");
    info!("API Endpoints:");
    info!("  POST   /stations               - Create a station");
    info!("  GET    /stations               - List stations");
    info!("  DELETE /stations/:id           - Delete a station");
    info!("  POST   /lines                  - Create a line");
    info!("  GET    /lines[/:id]            - Show lines");
    info!("  PUT    /lines/:id              - Rename a line");
    info!("  DELETE /lines/:id              - Delete a line");
    info!("  POST   /lines/:id/sections     - Add a section");
    info!("  DELETE /lines/:id/sections     - Remove the last section");
    info!("  GET    /paths?source=&target=  - Shortest path");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
