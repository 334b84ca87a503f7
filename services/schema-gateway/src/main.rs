//! Schema gateway HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the registry client, the client directory and the
//! HTTP router, then serves until interrupted.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use anyhow::Context;
use schema_gateway::access::AccessService;
use schema_gateway::app::{AppState, build_router};
use schema_gateway::config::GatewayConfig;
use schema_gateway::observability;
use schema_gateway::registry::HttpRegistryClient;
use schema_gateway::store::memory::InMemoryStore;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::from_env_or_yaml().context("schema gateway config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: GatewayConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("schema-gateway");
    let state = build_state(&config)?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);
    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        registry = %config.registry_url,
        "schema gateway listening"
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: &GatewayConfig) -> anyhow::Result<AppState> {
    let registry = HttpRegistryClient::new(config.registry_url.clone(), config.registry_timeout())
        .context("build schema registry client")?;
    let store = InMemoryStore::new();
    let access = AccessService::new(Arc::new(registry), Arc::new(store));
    Ok(AppState::new(Arc::new(access)))
}
