//! Workflow status vocabularies and validation.
//!
//! Every status column stores one of the string constants below. The
//! carry-forward view cares about a single question per item: is its
//! workflow status resolved (terminal) or not. Dev tasks answer that
//! with `dev_status`, the three bug kinds with `fix_status`;
//! [`StatusField`] captures which field applies.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Development status (dev tasks)
// ---------------------------------------------------------------------------

/// Task has not been picked up yet.
pub const DEV_PENDING: &str = "pending";
/// Task is being worked on.
pub const DEV_IN_PROGRESS: &str = "in_progress";
/// Development finished. The only resolved dev status.
pub const DEV_DONE: &str = "done";
/// Developer asked QA to review the task.
pub const DEV_REVIEW_REQUESTED: &str = "review_requested";
/// Task is parked.
pub const DEV_ON_HOLD: &str = "on_hold";

pub const VALID_DEV_STATUSES: &[&str] = &[
    DEV_PENDING,
    DEV_IN_PROGRESS,
    DEV_DONE,
    DEV_REVIEW_REQUESTED,
    DEV_ON_HOLD,
];

// ---------------------------------------------------------------------------
// Fix status (bug kinds)
// ---------------------------------------------------------------------------

pub const FIX_UNFIXED: &str = "unfixed";
pub const FIX_FIXING: &str = "fixing";
/// Bug has been fixed. The only resolved fix status.
pub const FIX_FIXED: &str = "fixed";
pub const FIX_ON_HOLD: &str = "on_hold";

pub const VALID_FIX_STATUSES: &[&str] = &[FIX_UNFIXED, FIX_FIXING, FIX_FIXED, FIX_ON_HOLD];

// ---------------------------------------------------------------------------
// Review status (bug kinds, independent of fix status)
// ---------------------------------------------------------------------------

pub const REVIEW_PRE: &str = "pre_review";
pub const REVIEW_IN_PROGRESS: &str = "reviewing";
pub const REVIEW_DONE: &str = "reviewed";

pub const VALID_REVIEW_STATUSES: &[&str] = &[REVIEW_PRE, REVIEW_IN_PROGRESS, REVIEW_DONE];

// ---------------------------------------------------------------------------
// Send status (all kinds)
// ---------------------------------------------------------------------------

pub const SEND_UNSENT: &str = "unsent";
pub const SEND_SENT: &str = "sent";
pub const SEND_RESENT: &str = "resent";

pub const VALID_SEND_STATUSES: &[&str] = &[SEND_UNSENT, SEND_SENT, SEND_RESENT];

// ---------------------------------------------------------------------------
// Priority (bug kinds)
// ---------------------------------------------------------------------------

pub const PRIORITY_URGENT: &str = "urgent";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_NORMAL: &str = "normal";
pub const PRIORITY_LOW: &str = "low";

pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_URGENT,
    PRIORITY_HIGH,
    PRIORITY_NORMAL,
    PRIORITY_LOW,
];

// ---------------------------------------------------------------------------
// Status field selection
// ---------------------------------------------------------------------------

/// Which status field decides resolved vs. unresolved for carry-forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    /// `dev_status`; resolved means [`DEV_DONE`].
    Dev,
    /// `fix_status`; resolved means [`FIX_FIXED`].
    Fix,
}

impl StatusField {
    /// Whether `status` is terminal for this field.
    ///
    /// Unknown values count as unresolved, so an item with a corrupt or
    /// missing status keeps showing up rather than silently aging out.
    pub fn is_resolved(self, status: &str) -> bool {
        match self {
            StatusField::Dev => status == DEV_DONE,
            StatusField::Fix => status == FIX_FIXED,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn check(value: &str, valid: &[&str], what: &str) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {what} '{value}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

pub fn validate_dev_status(status: &str) -> Result<(), CoreError> {
    check(status, VALID_DEV_STATUSES, "dev status")
}

pub fn validate_fix_status(status: &str) -> Result<(), CoreError> {
    check(status, VALID_FIX_STATUSES, "fix status")
}

pub fn validate_review_status(status: &str) -> Result<(), CoreError> {
    check(status, VALID_REVIEW_STATUSES, "review status")
}

pub fn validate_send_status(status: &str) -> Result<(), CoreError> {
    check(status, VALID_SEND_STATUSES, "send status")
}

pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    check(priority, VALID_PRIORITIES, "priority")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dev_statuses_are_valid() {
        for s in VALID_DEV_STATUSES {
            assert!(validate_dev_status(s).is_ok(), "dev status '{s}'");
        }
        assert!(validate_dev_status("shipped").is_err());
        assert!(validate_dev_status("").is_err());
    }

    #[test]
    fn all_fix_statuses_are_valid() {
        for s in VALID_FIX_STATUSES {
            assert!(validate_fix_status(s).is_ok(), "fix status '{s}'");
        }
        assert!(validate_fix_status("wontfix").is_err());
    }

    #[test]
    fn only_done_resolves_the_dev_field() {
        assert!(StatusField::Dev.is_resolved(DEV_DONE));
        for s in [DEV_PENDING, DEV_IN_PROGRESS, DEV_REVIEW_REQUESTED, DEV_ON_HOLD] {
            assert!(!StatusField::Dev.is_resolved(s), "'{s}' must be unresolved");
        }
    }

    #[test]
    fn only_fixed_resolves_the_fix_field() {
        assert!(StatusField::Fix.is_resolved(FIX_FIXED));
        for s in [FIX_UNFIXED, FIX_FIXING, FIX_ON_HOLD] {
            assert!(!StatusField::Fix.is_resolved(s), "'{s}' must be unresolved");
        }
    }

    #[test]
    fn unknown_status_counts_as_unresolved() {
        assert!(!StatusField::Dev.is_resolved(""));
        assert!(!StatusField::Fix.is_resolved("mystery"));
    }
}
