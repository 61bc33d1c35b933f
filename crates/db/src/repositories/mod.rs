//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod developer_repo;
pub mod item_repo;
pub mod send_log_repo;
pub mod version_repo;
pub mod webhook_config_repo;

pub use developer_repo::DeveloperRepo;
pub use item_repo::ItemRepo;
pub use send_log_repo::SendLogRepo;
pub use version_repo::VersionRepo;
pub use webhook_config_repo::WebhookConfigRepo;
