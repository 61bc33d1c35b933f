//! Platform constants and dispatch target routing.
//!
//! Items, developers, and webhook configs all carry a platform-shaped
//! string. Dispatch additionally routes on a *classification*: a platform
//! name, or [`PLATFORM_SHARED`] which fans out to both app platforms.

use crate::error::CoreError;

/// Android app platform.
pub const PLATFORM_AOS: &str = "aos";
/// iOS app platform.
pub const PLATFORM_IOS: &str = "ios";
/// Server-side issues.
pub const PLATFORM_SERVER: &str = "server";
/// Issues affecting both app platforms.
pub const PLATFORM_SHARED: &str = "shared";

/// Webhook target classification meaning "every space".
pub const TARGET_ALL: &str = "all";

/// Platforms an item or developer may belong to.
pub const VALID_PLATFORMS: &[&str] = &[PLATFORM_AOS, PLATFORM_IOS, PLATFORM_SERVER, PLATFORM_SHARED];

/// The two app platforms shared items fan out to.
pub const APP_PLATFORMS: &[&str] = &[PLATFORM_AOS, PLATFORM_IOS];

/// Classifications a webhook config may be registered under.
pub const VALID_WEBHOOK_TARGETS: &[&str] = &[PLATFORM_AOS, PLATFORM_IOS, PLATFORM_SERVER, TARGET_ALL];

pub fn validate_platform(platform: &str) -> Result<(), CoreError> {
    if VALID_PLATFORMS.contains(&platform) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid platform '{platform}'. Must be one of: {}",
            VALID_PLATFORMS.join(", ")
        )))
    }
}

pub fn validate_webhook_target(target: &str) -> Result<(), CoreError> {
    if VALID_WEBHOOK_TARGETS.contains(&target) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid webhook target '{target}'. Must be one of: {}",
            VALID_WEBHOOK_TARGETS.join(", ")
        )))
    }
}

/// Resolve a dispatch classification to the webhook targets it notifies.
///
/// `shared` fans out to both app platforms; anything else routes to the
/// single named classification.
pub fn resolve_targets(classification: &str) -> Result<Vec<&'static str>, CoreError> {
    match classification {
        PLATFORM_SHARED => Ok(APP_PLATFORMS.to_vec()),
        PLATFORM_AOS => Ok(vec![PLATFORM_AOS]),
        PLATFORM_IOS => Ok(vec![PLATFORM_IOS]),
        PLATFORM_SERVER => Ok(vec![PLATFORM_SERVER]),
        other => Err(CoreError::Validation(format!(
            "Invalid dispatch classification '{other}'. Must be one of: {}",
            VALID_PLATFORMS.join(", ")
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_fans_out_to_both_app_platforms() {
        assert_eq!(
            resolve_targets(PLATFORM_SHARED).unwrap(),
            vec![PLATFORM_AOS, PLATFORM_IOS]
        );
    }

    #[test]
    fn single_platforms_route_to_themselves() {
        assert_eq!(resolve_targets(PLATFORM_AOS).unwrap(), vec![PLATFORM_AOS]);
        assert_eq!(resolve_targets(PLATFORM_IOS).unwrap(), vec![PLATFORM_IOS]);
        assert_eq!(
            resolve_targets(PLATFORM_SERVER).unwrap(),
            vec![PLATFORM_SERVER]
        );
    }

    #[test]
    fn unknown_classification_is_rejected() {
        assert!(resolve_targets("desktop").is_err());
        assert!(resolve_targets("").is_err());
        // "all" is a webhook target, not a dispatch classification.
        assert!(resolve_targets(TARGET_ALL).is_err());
    }
}
