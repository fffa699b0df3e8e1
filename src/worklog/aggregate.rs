//! Grouping and totals over work-log records.
//!
//! Groupings use [`BTreeMap`] so reports enumerate members and projects in
//! ascending key order.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::worklog::structs::{UserLogWork, WorkLogRecord};

/// Returns `true` when a record's project alias and the requested alias
/// contain one another.
///
/// The match is bidirectional: `"core"` matches `"core-api"` and `"core-api"`
/// matches `"core"`. Short aliases therefore match broadly (`"a"` matches any
/// alias containing an `a`).
pub fn alias_matches(record_alias: &str, filter: &str) -> bool {
    record_alias.contains(filter) || filter.contains(record_alias)
}

/// Groups records by member, keeping only records whose project alias matches
/// `project_alias` (see [`alias_matches`]).
///
/// Records of each member keep their input order. Negative hours are kept
/// as sent by the work-log service and only logged.
pub fn group_by_member(
    records: &[WorkLogRecord],
    project_alias: &str,
) -> BTreeMap<String, UserLogWork> {
    let mut users: BTreeMap<String, UserLogWork> = BTreeMap::new();

    for record in records {
        if !alias_matches(&record.project_alias, project_alias) {
            debug!("skip record {}, alias {} not matched", record, project_alias);
            continue;
        }
        if record.hours < 0.0 {
            warn!("negative hours in record {}", record);
        }

        users
            .entry(record.member_alias.clone())
            .or_insert_with(|| UserLogWork::new(&record.member_alias))
            .worklog
            .push(record.clone());
    }

    users
}

impl UserLogWork {
    /// Sum of the hours of every record, `0.0` when there is none.
    pub fn total_hours(&self) -> f64 {
        self.worklog.iter().map(|record| record.hours).sum()
    }

    /// Splits this member's records by project name.
    ///
    /// Each value keeps the member alias and the records of one project in
    /// input order.
    pub fn group_by_project(&self) -> BTreeMap<String, UserLogWork> {
        let mut projects: BTreeMap<String, UserLogWork> = BTreeMap::new();

        for record in &self.worklog {
            projects
                .entry(record.project_name.clone())
                .or_insert_with(|| UserLogWork::new(&self.user_alias))
                .worklog
                .push(record.clone());
        }

        projects
    }
}
