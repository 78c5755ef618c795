//! Stockpulse API Server
//!
//! HTTP API server with health check, metrics, and stock analysis
//! endpoints. The service is stateless per request (only trained model
//! handles live across requests) and can be horizontally scaled.

use dotenvy::dotenv;
use stockpulse::config::{get_environment, get_port};
use stockpulse::core::http::start_server;
use stockpulse::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = get_environment();
    info!("Starting Stockpulse API Server");
    info!(environment = %env, "Environment");
    info!(port = get_port(), "HTTP Server: http://0.0.0.0:{}", get_port());

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server().await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
