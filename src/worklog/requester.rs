//! HTTP client for the internal work-log export API.
//!
//! This module provides the [`WorkLogRequester`] struct for requesting raw
//! work-log records between two dates.

use async_trait::async_trait;
use log::{debug, error, info};
use mockall::automock;
use reqwest::{Client, Error};

use crate::worklog::structs::{ExportData, WorkLogRecord};

/// HTTP client for requesting data from the work-log export API.
///
/// # Examples
///
/// ```no_run
/// let requester = WorkLogRequester::new("https://internal.example.com/api/export/worklog");
/// let export = requester.get_worklogs("06-10-2026", "13-10-2026", "core").await.unwrap();
/// println!("Records: {}", export.worklog.len());
/// ```
pub struct WorkLogRequester {
    /// Full url of the export endpoint
    url: String,
    /// HTTP client
    client: Client,
}

/// Trait for requesting work-logs.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
#[async_trait]
pub trait Requester: Send + Sync {
    /// Fetches the raw, unfiltered records logged in `[from_date, to_date)`.
    async fn get_worklogs(
        &self,
        from_date: &str,
        to_date: &str,
        project_alias: &str,
    ) -> Result<ExportData, Error>;
}

impl WorkLogRequester {
    /// Create a new [WorkLogRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The full url of the export endpoint.
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::new();
        WorkLogRequester {
            url: url.to_string(),
            client,
        }
    }
}

#[async_trait]
impl Requester for WorkLogRequester {
    /// Request `{url}?start={from}&stop={to}&project_alias={alias}`.
    ///
    /// This api call returns a json object:
    /// ```json
    /// { "worklog": [ { "project_alias": "core", "member_alias": "alice", "hours": 2.5, ... } ] }
    /// ```
    async fn get_worklogs(
        &self,
        from_date: &str,
        to_date: &str,
        project_alias: &str,
    ) -> Result<ExportData, Error> {
        info!(
            "request worklogs of {} from {} to {}",
            project_alias, from_date, to_date
        );

        let export: ExportData = self
            .client
            .get(&self.url)
            .query(&[
                ("start", from_date),
                ("stop", to_date),
                ("project_alias", project_alias),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {} records", &self.url, export.worklog.len());

        Ok(export)
    }
}

/// Fetches records through `requester`, turning any failure into an empty list.
///
/// Upstream errors are logged here and never reach the caller, so a failed
/// fetch produces an empty report.
pub async fn fetch_worklogs<R: Requester + ?Sized>(
    requester: &R,
    from_date: &str,
    to_date: &str,
    project_alias: &str,
) -> Vec<WorkLogRecord> {
    match requester
        .get_worklogs(from_date, to_date, project_alias)
        .await
    {
        Ok(export) => export.worklog,
        Err(e) => {
            error!("error while requesting worklogs: {}", e);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_matcher() -> mockito::Matcher {
        mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("start".to_owned(), "06-10-2026".to_owned()),
            mockito::Matcher::UrlEncoded("stop".to_owned(), "13-10-2026".to_owned()),
            mockito::Matcher::UrlEncoded("project_alias".to_owned(), "core".to_owned()),
        ])
    }

    #[tokio::test]
    async fn test_get_worklogs() {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/api/export/worklog", server.url());
        let body = r#"{"worklog": [
            {"project_alias": "core", "project_name": "Core", "member_alias": "alice", "hours": 2.5, "log_message": "review"},
            {"project_alias": "core", "project_name": "Core", "member_alias": "bob", "hours": 3.0, "log_message": "fix"}
        ]}"#;

        server
            .mock("GET", "/api/export/worklog")
            .match_query(query_matcher())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let requester = WorkLogRequester::new(&url);
        let export = requester
            .get_worklogs("06-10-2026", "13-10-2026", "core")
            .await
            .unwrap();

        assert_eq!(export.worklog.len(), 2);
        assert_eq!(export.worklog[0].member_alias, "alice");
        assert_eq!(export.worklog[1].hours, 3.0);
    }

    #[tokio::test]
    async fn test_get_worklogs_server_error() {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/api/export/worklog", server.url());

        server
            .mock("GET", "/api/export/worklog")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let requester = WorkLogRequester::new(&url);
        let result = requester
            .get_worklogs("06-10-2026", "13-10-2026", "core")
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_worklogs_returns_empty_on_error() {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/api/export/worklog", server.url());

        server
            .mock("GET", "/api/export/worklog")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let requester = WorkLogRequester::new(&url);
        let records = fetch_worklogs(&requester, "06-10-2026", "13-10-2026", "core").await;

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_worklogs_with_mock_requester() {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_worklogs()
            .with(
                mockall::predicate::eq("06-10-2026"),
                mockall::predicate::eq("13-10-2026"),
                mockall::predicate::eq("core"),
            )
            .times(1)
            .returning(|_, _, _| Ok(ExportData::default()));

        let records = fetch_worklogs(&mock_requester, "06-10-2026", "13-10-2026", "core").await;

        assert!(records.is_empty());
    }
}
