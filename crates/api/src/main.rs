use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use userstore_api::config::ServerConfig;
use userstore_infra::{InMemoryUserRepository, UserRepository};

#[tokio::main]
async fn main() -> ExitCode {
    userstore_observability::init();

    if let Err(e) = run().await {
        tracing::error!("failed to run server: {e:#}");
        return ExitCode::FAILURE;
    }

    tracing::info!("all systems offline");
    ExitCode::SUCCESS
}

async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let app = userstore_api::app::build_app(users, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        request_timeout_secs = config.request_timeout.as_secs(),
        "listening"
    );

    userstore_api::server::serve(listener, app, config.shutdown_grace)
        .await
        .context("server error")
}
