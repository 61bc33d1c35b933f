//! HTTP handlers, one module per resource.

pub mod developers;
pub mod items;
pub mod send;
pub mod send_logs;
pub mod versions;
pub mod webhooks;
