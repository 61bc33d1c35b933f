//! Item kinds.
//!
//! The four tracked record families (development tasks plus three bug
//! flavours) share one table and one struct; [`ItemKind`] is the tag that
//! selects the kind-specific rules: which platforms are legal, which status
//! field drives carry-forward, and how dispatch behaves.

use crate::error::CoreError;
use crate::platform::{PLATFORM_AOS, PLATFORM_IOS, PLATFORM_SERVER, PLATFORM_SHARED};
use crate::status::StatusField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A planned development task for one of the app platforms.
    DevTask,
    /// A bug in one of the two apps.
    PlatformBug,
    /// A bug affecting both apps.
    SharedBug,
    /// A server-side bug.
    ServerBug,
}

impl ItemKind {
    pub const ALL: &'static [ItemKind] = &[
        ItemKind::DevTask,
        ItemKind::PlatformBug,
        ItemKind::SharedBug,
        ItemKind::ServerBug,
    ];

    /// Stable string form, as stored in the `items.kind` column and used
    /// as the `send_type` in send logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::DevTask => "dev_task",
            ItemKind::PlatformBug => "platform_bug",
            ItemKind::SharedBug => "shared_bug",
            ItemKind::ServerBug => "server_bug",
        }
    }

    pub fn parse(s: &str) -> Result<ItemKind, CoreError> {
        match s {
            "dev_task" => Ok(ItemKind::DevTask),
            "platform_bug" => Ok(ItemKind::PlatformBug),
            "shared_bug" => Ok(ItemKind::SharedBug),
            "server_bug" => Ok(ItemKind::ServerBug),
            other => Err(CoreError::Validation(format!(
                "Invalid item kind '{other}'. Must be one of: dev_task, platform_bug, shared_bug, server_bug"
            ))),
        }
    }

    /// The status field that decides resolved vs. unresolved for this kind.
    pub fn status_field(self) -> StatusField {
        match self {
            ItemKind::DevTask => StatusField::Dev,
            _ => StatusField::Fix,
        }
    }

    pub fn is_bug(self) -> bool {
        !matches!(self, ItemKind::DevTask)
    }

    /// Platforms an item of this kind may carry. Shared and server bugs
    /// have exactly one legal platform.
    pub fn allowed_platforms(self) -> &'static [&'static str] {
        match self {
            ItemKind::DevTask | ItemKind::PlatformBug => &[PLATFORM_AOS, PLATFORM_IOS],
            ItemKind::SharedBug => &[PLATFORM_SHARED],
            ItemKind::ServerBug => &[PLATFORM_SERVER],
        }
    }

    pub fn validate_platform(self, platform: &str) -> Result<(), CoreError> {
        if self.allowed_platforms().contains(&platform) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Invalid platform '{platform}' for kind '{}'. Must be one of: {}",
                self.as_str(),
                self.allowed_platforms().join(", ")
            )))
        }
    }

    /// Human heading used in chat messages.
    pub fn message_heading(self) -> &'static str {
        match self {
            ItemKind::DevTask => "Dev tasks",
            ItemKind::PlatformBug => "App bugs",
            ItemKind::SharedBug => "Shared bugs",
            ItemKind::ServerBug => "Server bugs",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::parse(kind.as_str()).unwrap(), *kind);
        }
        assert_matches!(ItemKind::parse("feature"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn dev_tasks_use_the_dev_field_bugs_the_fix_field() {
        assert_eq!(ItemKind::DevTask.status_field(), StatusField::Dev);
        assert_eq!(ItemKind::PlatformBug.status_field(), StatusField::Fix);
        assert_eq!(ItemKind::SharedBug.status_field(), StatusField::Fix);
        assert_eq!(ItemKind::ServerBug.status_field(), StatusField::Fix);
    }

    #[test]
    fn platform_rules_per_kind() {
        assert!(ItemKind::DevTask.validate_platform("aos").is_ok());
        assert!(ItemKind::DevTask.validate_platform("shared").is_err());
        assert!(ItemKind::SharedBug.validate_platform("shared").is_ok());
        assert!(ItemKind::SharedBug.validate_platform("aos").is_err());
        assert!(ItemKind::ServerBug.validate_platform("server").is_ok());
        assert!(ItemKind::ServerBug.validate_platform("ios").is_err());
    }
}
