//! maclog library entrypoint.
//!
//! Modules:
//! - `app`: startup, shared state, graceful shutdown
//! - `config`: environment configuration
//! - `http`: Axum router and handlers
//! - `db`: the `LogStore` gateway and its PostgreSQL implementation
//! - `models`: typed records used across layers
//! - `validate`: CPF and MAC address format checks
//! - `util`: tracing setup and parsing helpers

pub mod app;
pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod util;
pub mod validate;
