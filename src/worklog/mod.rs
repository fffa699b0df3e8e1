//! Work-log retrieval, aggregation and reporting.
//!
//! This module turns the flat list of records returned by the internal
//! work-log API into per-member, per-project reports.
//!
//! # Modules
//!
//! - `requester` - HTTP client for the work-log export endpoint
//! - `structs` - Records and per-member accumulators
//! - `aggregate` - Alias filtering, grouping and totals
//! - `date_range` - Resolution of `today`, `last-week`, ... into dates
//! - `report` - Summary and detail text layouts
//!
//! # Flow
//!
//! ```text
//! <time> → resolve_range() → fetch_worklogs() → group_by_member() → summary_report() / detail_report()
//! ```

mod aggregate;
mod date_range;
mod report;
mod requester;
mod structs;

pub use crate::worklog::aggregate::group_by_member;
pub use crate::worklog::date_range::resolve_range_now;
pub use crate::worklog::report::{detail_report, summary_report};
#[cfg(test)]
pub use crate::worklog::requester::MockRequester;
pub use crate::worklog::requester::{Requester, WorkLogRequester, fetch_worklogs};
#[cfg(test)]
pub use crate::worklog::structs::{ExportData, WorkLogRecord};
