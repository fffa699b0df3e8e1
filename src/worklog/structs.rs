//! Data structures for work-log records and their per-member grouping.
//!
//! [`WorkLogRecord`] mirrors one entry of the internal export API, while
//! [`UserLogWork`] is the accumulator built by the aggregation step.

use std::fmt;

use serde::Deserialize;

/// One logged unit of time against a project by a member.
///
/// Records are fetched from the internal work-log API and never modified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkLogRecord {
    /// Short identifier of the project, used for filtering
    pub project_alias: String,
    /// Human readable project name, used as the grouping key in reports
    pub project_name: String,
    /// Short identifier of the member who logged the time
    pub member_alias: String,
    #[serde(default)]
    pub work_unit: String,
    #[serde(default)]
    pub log_type: String,
    /// Day the work was done, `DD-MM-YYYY`
    #[serde(default)]
    pub log_for_date: String,
    /// Logged hours, expected non-negative
    pub hours: f64,
    /// Free text written by the member
    #[serde(default)]
    pub log_message: String,
    /// Timestamp of the log submission
    #[serde(default)]
    pub logged_on: String,
}

impl fmt::Display for WorkLogRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "project={}, member={}, date={}, hours={:.2}",
            self.project_alias, self.member_alias, self.log_for_date, self.hours
        )
    }
}

/// Body of the `/api/export/worklog` response.
///
/// ```json
/// { "worklog": [ { "project_alias": "core", "member_alias": "alice", "hours": 2.5, ... } ] }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ExportData {
    #[serde(default)]
    pub worklog: Vec<WorkLogRecord>,
}

/// Work-log records of a single member.
///
/// Every record in `worklog` has `member_alias == user_alias`. Records keep the
/// order in which they were received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserLogWork {
    /// Alias of the member owning the records
    pub user_alias: String,
    /// Records of the member, in input order
    pub worklog: Vec<WorkLogRecord>,
}

impl UserLogWork {
    /// Creates an empty accumulator for `user_alias`.
    pub fn new(user_alias: &str) -> Self {
        UserLogWork {
            user_alias: user_alias.to_owned(),
            worklog: Vec::new(),
        }
    }
}
