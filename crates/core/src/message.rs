//! Chat message formatting for webhook dispatch.
//!
//! Messages follow a fixed structure: a header naming the kind and
//! platform/version, one block per item, and a footer deep-linking back
//! into the dashboard. The concrete symbols are a display convention; the
//! structure is the contract.

use crate::status::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_URGENT};

/// Divider line between item blocks.
const DIVIDER: &str = "------------------------------";

/// Shown when an item has no assignees.
pub const UNASSIGNED: &str = "unassigned";

/// Maximum length (in characters) of the item summary stored in a send log.
pub const MAX_ITEM_SUMMARY_CHARS: usize = 200;

/// Fields of a dev task a chat message renders.
#[derive(Debug, Clone)]
pub struct DevTaskLine {
    pub label: String,
    pub description: String,
    pub assignees: Vec<String>,
    pub department: String,
    pub requester: String,
    pub is_required: bool,
}

/// Fields of a bug a chat message renders.
#[derive(Debug, Clone)]
pub struct BugLine {
    pub priority: String,
    pub location: String,
    pub description: String,
    pub reporter: String,
    pub assignees: Vec<String>,
}

/// Marker prefixed to a bug's priority line.
pub fn priority_marker(priority: &str) -> &'static str {
    match priority {
        PRIORITY_URGENT => "[URGENT]",
        PRIORITY_HIGH => "[HIGH]",
        PRIORITY_LOW => "[LOW]",
        // Normal, plus unknown values, which render as normal rather than erroring.
        _ => "[NORMAL]",
    }
}

/// Join assignee names for display, falling back to [`UNASSIGNED`].
pub fn assignee_display(names: &[String]) -> String {
    if names.is_empty() {
        UNASSIGNED.to_string()
    } else {
        names.join(", ")
    }
}

/// Format the notification for a batch of dev tasks.
///
/// The version comes from the first item of the batch by convention; the
/// caller is responsible for flagging mixed-version batches.
pub fn format_dev_task_message(
    items: &[DevTaskLine],
    platform: &str,
    version: &str,
    app_url: &str,
) -> String {
    let mut out = format!("[Dev tasks] {platform} {version}\n");
    for item in items {
        out.push_str(DIVIDER);
        out.push('\n');
        out.push_str(&format!("* {}\n", item.label));
        if !item.description.is_empty() {
            out.push_str(&format!("  Detail: {}\n", item.description));
        }
        out.push_str(&format!("  Assignee: {}\n", assignee_display(&item.assignees)));
        out.push_str(&format!(
            "  Dept: {} / Requester: {}\n",
            dash_if_empty(&item.department),
            dash_if_empty(&item.requester),
        ));
        out.push_str(&format!(
            "  Required: {}\n",
            if item.is_required { "yes" } else { "no" }
        ));
    }
    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str(&format!("Link: {app_url}/dev/{platform}\n"));
    out
}

/// Format the notification for a batch of bugs.
pub fn format_bug_message(
    items: &[BugLine],
    heading: &str,
    version: &str,
    app_url: &str,
) -> String {
    let mut out = format!("[{heading}] {version}\n");
    for item in items {
        out.push_str(DIVIDER);
        out.push('\n');
        out.push_str(&format!(
            "{} Priority: {}\n",
            priority_marker(&item.priority),
            item.priority
        ));
        out.push_str(&format!("  Location: {}\n", item.location));
        if !item.description.is_empty() {
            out.push_str(&format!("  Detail: {}\n", item.description));
        }
        out.push_str(&format!("  Reporter: {}\n", dash_if_empty(&item.reporter)));
        out.push_str(&format!("  Assignee: {}\n", assignee_display(&item.assignees)));
    }
    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str(&format!("Link: {app_url}/bugs\n"));
    out
}

/// Build the audit summary for a dispatched batch: item labels joined with
/// `, `, truncated to [`MAX_ITEM_SUMMARY_CHARS`] on a character boundary.
pub fn build_item_summary<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = labels.into_iter().collect::<Vec<_>>().join(", ");
    joined.chars().take(MAX_ITEM_SUMMARY_CHARS).collect()
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_line(label: &str) -> DevTaskLine {
        DevTaskLine {
            label: label.to_string(),
            description: "enable the comparison tab".to_string(),
            assignees: vec!["Kim".to_string()],
            department: "Planning".to_string(),
            requester: "Lee".to_string(),
            is_required: true,
        }
    }

    #[test]
    fn dev_message_has_header_blocks_and_footer() {
        let msg = format_dev_task_message(
            &[dev_line("Comparison tab"), dev_line("Night mode")],
            "aos",
            "V51.0.3",
            "https://qa.example.com",
        );

        assert!(msg.starts_with("[Dev tasks] aos V51.0.3\n"));
        assert_eq!(msg.matches("* ").count(), 2);
        assert!(msg.contains("Required: yes"));
        assert!(msg.ends_with("Link: https://qa.example.com/dev/aos\n"));
    }

    #[test]
    fn bug_message_includes_priority_marker_and_reporter() {
        let bug = BugLine {
            priority: "urgent".to_string(),
            location: "Results > standings".to_string(),
            description: String::new(),
            reporter: "Park".to_string(),
            assignees: vec![],
        };
        let msg = format_bug_message(&[bug], "App bugs", "V51.0.3", "https://qa.example.com");

        assert!(msg.contains("[URGENT] Priority: urgent"));
        assert!(msg.contains("Location: Results > standings"));
        // Empty description lines are omitted entirely.
        assert!(!msg.contains("Detail:"));
        assert!(msg.contains("Assignee: unassigned"));
        assert!(msg.ends_with("Link: https://qa.example.com/bugs\n"));
    }

    #[test]
    fn summary_joins_labels_and_truncates_to_200_chars() {
        let short = build_item_summary(["login crash", "broken banner"]);
        assert_eq!(short, "login crash, broken banner");

        let long_label = "x".repeat(500);
        let summary = build_item_summary([long_label.as_str(), "tail"]);
        assert_eq!(summary.chars().count(), MAX_ITEM_SUMMARY_CHARS);
    }

    #[test]
    fn summary_truncation_is_char_boundary_safe() {
        // 199 ASCII chars followed by a multi-byte char: a byte-based
        // slice at 200 would split the code point.
        let label = format!("{}한글", "a".repeat(199));
        let summary = build_item_summary([label.as_str()]);
        assert_eq!(summary.chars().count(), MAX_ITEM_SUMMARY_CHARS);
        assert!(summary.ends_with('한'));
    }

    #[test]
    fn unknown_priority_falls_back_to_normal_marker() {
        assert_eq!(priority_marker("whenever"), "[NORMAL]");
    }
}
