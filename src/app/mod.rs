//! Application setup and runtime.

use crate::{
  config::Config,
  db::{LogStore, PgLogStore},
  http,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn LogStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn LogStore>) -> Self {
    Self { store }
  }
}

/// Start the HTTP server with configuration from the environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  dotenvy::dotenv().ok();
  crate::util::init_tracing();

  let config = Config::from_env()?;
  let addr = config.listen_addr()?;

  let pg = PgLogStore::connect_lazy(&config.db);
  if config.db.init_schema {
    // The store may still be starting; /health reports it until it is up.
    if let Err(e) = pg.ensure_schema().await {
      warn!("could not ensure logs table: {e}");
    }
  }
  let store: Arc<dyn LogStore> = Arc::new(pg);
  let app = http::build_router(AppState::new(store.clone()));

  let listener = tokio::net::TcpListener::bind(addr).await?;
  info!("maclog dashboard:   http://{}/", addr);
  info!("log endpoint:       POST http://{}/logs", addr);
  info!(
    "database:           {}@{}:{}/{}",
    config.db.user, config.db.host, config.db.port, config.db.name
  );

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  info!("closing database pool");
  store.close().await;
  Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      warn!("ctrl-c handler failed: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        warn!("SIGTERM handler failed: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }
  info!("shutdown signal received, draining connections");
}
