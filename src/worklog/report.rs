//! Text rendering of aggregated work-logs.
//!
//! Two layouts are available:
//!
//! - **summary**: per member, the total hours of each project
//! - **detail**: the summary plus every individual entry under its project
//!
//! Log messages are emitted verbatim, without escaping.

use std::collections::BTreeMap;

use crate::worklog::{date_range::DateRange, structs::UserLogWork};

/// Renders one member block of the summary layout.
///
/// ```text
/// @alice
/// 	+ Core: 3.50h
///
/// ```
pub fn format_user_summary(user: &UserLogWork) -> String {
    let mut result = format!("@{}\n", user.user_alias);
    for (project_name, project_log) in user.group_by_project() {
        result += &format!("\t+ {}: {:.2}h\n", project_name, project_log.total_hours());
    }
    result += "\n";
    result
}

/// Renders one member block of the detail layout.
///
/// ```text
/// @alice
///   + *Core:* 3.50h
/// 	- 2.50: review
/// 	- 1.00: deploy
///
/// ```
pub fn format_user_detail(user: &UserLogWork) -> String {
    let mut result = format!("@{}\n", user.user_alias);
    for (project_name, project_log) in user.group_by_project() {
        result += &format!("  + *{}:* {:.2}h\n", project_name, project_log.total_hours());
        for record in &project_log.worklog {
            result += &format!("\t- {:.2}: {}\n", record.hours, record.log_message);
        }
    }
    result += "\n";
    result
}

/// Summary layout for every member of `users`.
pub fn format_summary(users: &BTreeMap<String, UserLogWork>) -> String {
    users.values().map(format_user_summary).collect()
}

/// Detail layout for every member of `users`.
pub fn format_detail(users: &BTreeMap<String, UserLogWork>) -> String {
    users.values().map(format_user_detail).collect()
}

/// Full summary report, including the project and range header.
pub fn summary_report(
    project_alias: &str,
    range: &DateRange,
    users: &BTreeMap<String, UserLogWork>,
) -> String {
    format!(
        "Project `{}` (`{}` to `{}`) summary:\n{}",
        project_alias,
        range.from,
        range.to,
        format_summary(users)
    )
}

/// Full detail report, including the project and range header.
pub fn detail_report(
    project_alias: &str,
    range: &DateRange,
    users: &BTreeMap<String, UserLogWork>,
) -> String {
    format!(
        "Detail Project log `{}` (`{}` to `{}`):\n{}",
        project_alias,
        range.from,
        range.to,
        format_detail(users)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worklog::{aggregate::group_by_member, structs::WorkLogRecord};

    fn record(member: &str, project: &str, hours: f64, message: &str) -> WorkLogRecord {
        WorkLogRecord {
            project_alias: project.to_string(),
            project_name: project.to_string(),
            member_alias: member.to_string(),
            work_unit: "hour".to_string(),
            log_type: "dev".to_string(),
            log_for_date: "12-10-2026".to_string(),
            hours,
            log_message: message.to_string(),
            logged_on: "12-10-2026".to_string(),
        }
    }

    fn range() -> DateRange {
        DateRange {
            from: "12-10-2026".to_string(),
            to: "13-10-2026".to_string(),
        }
    }

    fn sample_records() -> Vec<WorkLogRecord> {
        vec![
            record("alice", "core", 2.5, "review"),
            record("alice", "core", 1.0, "deploy"),
            record("bob", "core", 3.0, "fix <b>bug</b>"),
        ]
    }

    #[test]
    fn test_format_summary() {
        let users = group_by_member(&sample_records(), "core");

        let summary = format_summary(&users);

        assert_eq!(
            summary,
            "@alice\n\t+ core: 3.50h\n\n@bob\n\t+ core: 3.00h\n\n"
        );
    }

    #[test]
    fn test_format_summary_contains_one_block_per_user() {
        let users = group_by_member(&sample_records(), "core");

        let summary = format_summary(&users);

        let blocks: Vec<&str> = summary.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().any(|b| b.starts_with("@alice") && b.contains("core: 3.50h")));
        assert!(blocks.iter().any(|b| b.starts_with("@bob") && b.contains("core: 3.00h")));
    }

    #[test]
    fn test_format_summary_multiple_projects() {
        let records = vec![
            record("alice", "core", 2.0, "a"),
            record("alice", "core-api", 0.5, "b"),
        ];
        let users = group_by_member(&records, "core");

        let summary = format_summary(&users);

        assert!(summary.contains("\t+ core: 2.00h\n"));
        assert!(summary.contains("\t+ core-api: 0.50h\n"));
    }

    #[test]
    fn test_format_detail() {
        let users = group_by_member(&sample_records(), "core");

        let detail = format_detail(&users);

        assert_eq!(
            detail,
            "@alice\n  + *core:* 3.50h\n\t- 2.50: review\n\t- 1.00: deploy\n\n\
             @bob\n  + *core:* 3.00h\n\t- 3.00: fix <b>bug</b>\n\n"
        );
    }

    #[test]
    fn test_summary_report_header() {
        let users = group_by_member(&sample_records(), "core");

        let report = summary_report("core", &range(), &users);

        assert!(report.starts_with("Project `core` (`12-10-2026` to `13-10-2026`) summary:\n"));
        assert!(report.contains("@alice"));
    }

    #[test]
    fn test_detail_report_empty() {
        let users = group_by_member(&[], "core");

        let report = detail_report("core", &range(), &users);

        assert_eq!(
            report,
            "Detail Project log `core` (`12-10-2026` to `13-10-2026`):\n"
        );
        assert!(!report.contains('+'));
    }

    #[test]
    fn test_summary_report_empty() {
        let report = summary_report("core", &range(), &BTreeMap::new());
        assert!(!report.is_empty());
        assert!(!report.contains('@'));
    }
}
