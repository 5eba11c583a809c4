use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::{ServeArgs, ServerConfig, StorageConfig};
use crate::error::ServerError;
use storage_memory::MemoryStore;
use storage_mongo::MongoStore;
use student_api::RecordStore;

pub async fn run(args: ServeArgs) -> Result<(), ServerError> {
    tracing::info!("student-server starting");

    // --- Load config ---
    let config = match &args.config {
        Some(path) => {
            let config = ServerConfig::load(path)?;
            tracing::info!(config = %path, "loaded config");
            config
        }
        None => ServerConfig::default(),
    };
    let port = args.port.unwrap_or(config.api_port);

    // --- Connect store once, before accepting requests ---
    let store: Arc<dyn RecordStore> = match &config.storage {
        StorageConfig::Mongo(mongo_cfg) => Arc::new(MongoStore::new(mongo_cfg.clone())),
        StorageConfig::Memory => {
            tracing::warn!("using in-memory storage, records are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    if let Err(e) = store.init().await {
        tracing::error!(error = %e, "failed to connect to the database");
        return Err(e.into());
    }

    // --- CancellationToken for graceful shutdown ---
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl-c handler failed");
            return;
        }
        tracing::info!("shutting down...");
        signal_token.cancel();
    });

    // --- API server (HTTP) ---
    student_api_server::run(&config.bind, port, store, token)
        .await
        .map_err(ServerError::Api)?;

    tracing::info!("shutdown complete");
    Ok(())
}
