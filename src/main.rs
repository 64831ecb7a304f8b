//! GitOps hello service — minimal HTTP server.
//!
//! Serves a single JSON document reporting which environment and version
//! the process was deployed with, so a GitOps pipeline has something
//! observable to roll out.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gitops_hello::config::ApiConfig;
use gitops_hello::routes;
use gitops_hello::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gitops-hello starting");

    let config = ApiConfig::from_env();
    tracing::info!(
        environment = %config.environment,
        deploy_version = %config.version,
        "config loaded"
    );

    let state = AppState::from_config(&config);
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
