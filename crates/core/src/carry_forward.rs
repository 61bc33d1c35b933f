//! Carry-forward filtering.
//!
//! The working set for a selected release version is everything tagged
//! with that version, plus unresolved items lingering from older versions.
//! An unresolved item keeps reappearing no matter how many releases have
//! shipped since it was filed; it only ages out once its workflow status
//! becomes resolved. That unbounded backlog is deliberate.

use crate::status::StatusField;

/// Read access the carry-forward computation needs from an item.
///
/// Implemented by the `db` crate's row struct; kept as a trait so the
/// filtering logic stays free of storage concerns and easy to test.
pub trait WorkflowItem {
    /// The release version label the item was filed under.
    fn item_version(&self) -> &str;
    /// The value of the status field that decides resolved vs. unresolved
    /// (dev status for dev tasks, fix status for bugs).
    fn workflow_status(&self) -> &str;
}

/// One item in the computed working set.
///
/// `carried_from` is presentation metadata only: it records the item's true
/// origin version when the item was carried forward from an older release.
/// The item's own version field is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSetEntry<T> {
    pub item: T,
    pub carried_from: Option<String>,
}

/// Compute the working set for `selected_version`.
///
/// `versions_newest_first` is the ordered version registry for the item's
/// platform. With no selected version the input is returned unfiltered.
/// Otherwise the result is the union of exact version matches (any status)
/// and unresolved items from strictly older versions, each of the latter
/// annotated with its origin version.
///
/// A selected version missing from the registry (stale or deleted
/// selection) is treated as newest, so every known version is scanned for
/// carry candidates.
pub fn compute_working_set<T: WorkflowItem>(
    items: Vec<T>,
    selected_version: Option<&str>,
    versions_newest_first: &[String],
    field: StatusField,
) -> Vec<WorkingSetEntry<T>> {
    let selected = match selected_version {
        Some(v) if !v.is_empty() => v,
        _ => {
            return items
                .into_iter()
                .map(|item| WorkingSetEntry {
                    item,
                    carried_from: None,
                })
                .collect();
        }
    };

    // Versions strictly older than the selection. A selection not present
    // in the registry sits at position "newest", making every known
    // version older than it.
    let older_start = versions_newest_first
        .iter()
        .position(|v| v == selected)
        .map_or(0, |pos| pos + 1);
    let older_versions = &versions_newest_first[older_start.min(versions_newest_first.len())..];

    let mut working_set = Vec::new();
    for item in items {
        let version = item.item_version();
        if version == selected {
            working_set.push(WorkingSetEntry {
                item,
                carried_from: None,
            });
        } else if older_versions.iter().any(|v| v == version)
            && !field.is_resolved(item.workflow_status())
        {
            let carried_from = Some(version.to_string());
            working_set.push(WorkingSetEntry { item, carried_from });
        }
    }
    working_set
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
