mod cli;

use crate::cli::{Cli, IdSchemeArg};
use clap::Parser;
use roster_core::EmployeeDirectory;
use roster_gateway::{App, AppState};
use roster_service::{DirectoryPolicy, RecordService, SeqIdGenerator, UuidGenerator};
use roster_storage::InMemoryStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();

    roster_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        id_scheme = %config.id_scheme,
        department_policy = %config.department_policy,
        "starting roster gateway"
    );

    let policy = DirectoryPolicy::builder()
        .departments(config.department_policy.into())
        .build();

    let directory: Arc<dyn EmployeeDirectory> = match config.id_scheme {
        IdSchemeArg::Uuid => Arc::new(RecordService::with_policy(
            InMemoryStore::new(),
            UuidGenerator,
            policy,
        )),
        IdSchemeArg::Sequential => Arc::new(RecordService::with_policy(
            InMemoryStore::new(),
            SeqIdGenerator::with_prefix(config.id_prefix),
            policy,
        )),
    };

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(AppState::new(directory)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
