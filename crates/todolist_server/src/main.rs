//! Server entry point.
//!
//! Reads `ServerConfig` from the environment, initializes logging, opens the
//! store, and serves the router until Ctrl-C.

use log::{info, warn};
use todolist_core::db::{open_db, open_db_in_memory};
use todolist_core::{core_version, init_logging};
use todolist_server::{router, AppState, DbLocation, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let conn = match &config.db {
        DbLocation::Memory => open_db_in_memory()?,
        DbLocation::File(path) => open_db(path)?,
    };
    let app = router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_listen module=server status=ok addr={} version={}",
        config.bind_addr,
        core_version()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("event=server_stop module=server status=ok");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=server_signal module=server status=error error={err}");
    }
}
