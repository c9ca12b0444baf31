//! Solver server
//!
//! Thin HTTP surface over `solver_engine`: validates a move request, runs
//! the configured search, and returns the chosen column together with the
//! explored tree.

mod config;
mod error;
mod routes;
mod schema;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;
    let addr = config.bind_addr()?;
    let app = routes::router(&config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "solver server listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
