use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notify::NotificationSender;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: qadesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound webhook transport. A trait object so tests can substitute
    /// a recording mock.
    pub sender: Arc<dyn NotificationSender>,
}
