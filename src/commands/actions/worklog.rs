//! Work-log report handlers.
//!
//! Backs the `Log summary <project_alias> <time>` and
//! `Log detail <project_alias> <time>` commands. Each call resolves the date
//! range, fetches the records, groups them by member and renders the report.
//! Nothing is cached between calls.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::commands::{CommandContext, CommandHandler};
use crate::worklog::{
    Requester, detail_report, fetch_worklogs, group_by_member, resolve_range_now, summary_report,
};

/// Parameter holding the project alias filter.
pub const PROJECT_ALIAS_PARAMETER: &str = "project_alias";
/// Parameter holding the time symbol.
pub const TIME_PARAMETER: &str = "time";
/// Time symbol used when the `time` parameter is missing.
pub const DEFAULT_TIME: &str = "today";

/// Layout of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLayout {
    /// Project totals per member
    Summary,
    /// Project totals per member with every entry
    Detail,
}

/// Handler producing a work-log report.
pub struct WorklogHandler {
    requester: Arc<dyn Requester>,
    layout: ReportLayout,
}

impl WorklogHandler {
    pub fn new(requester: Arc<dyn Requester>, layout: ReportLayout) -> Self {
        WorklogHandler { requester, layout }
    }
}

#[async_trait]
impl CommandHandler for WorklogHandler {
    async fn execute(&self, context: &CommandContext<'_>) -> String {
        let project_alias = context
            .parameters
            .get(PROJECT_ALIAS_PARAMETER)
            .map(String::as_str)
            .unwrap_or("");
        let time = context
            .parameters
            .get(TIME_PARAMETER)
            .map(String::as_str)
            .unwrap_or(DEFAULT_TIME);

        let range = resolve_range_now(time);
        info!(
            "handling {:?} report of {} ({})",
            self.layout, project_alias, range
        );

        let records = fetch_worklogs(
            self.requester.as_ref(),
            &range.from,
            &range.to,
            project_alias,
        )
        .await;
        let users = group_by_member(&records, project_alias);
        debug!("{} records grouped in {} members", records.len(), users.len());

        match self.layout {
            ReportLayout::Summary => summary_report(project_alias, &range, &users),
            ReportLayout::Detail => detail_report(project_alias, &range, &users),
        }
    }
}
