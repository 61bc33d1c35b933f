//! Response envelope for API handlers.
//!
//! Every endpoint wraps its payload in `{ "data": ... }` so the dashboard
//! client can unwrap list, item, and dispatch responses uniformly.
//! [`DataResponse`] keeps the envelope typed instead of assembling ad-hoc
//! `serde_json::json!` maps in each handler.

use serde::Serialize;

/// The `{ "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
