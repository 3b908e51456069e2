//! Quote and record storage on top of a repository's issues.
//!
//! Quotes are open issues labeled `quote`; records are issues labeled
//! `record`. Comments and reactions hang off issues by number.
//!
//! Every operation comes in two flavors. The `try_*` methods return
//! `Result<_, ApiError>`. The plain methods log failures with
//! `tracing::error!` and return an empty `Vec` or `None` instead.

use reqwest::Method;
use serde_json::{Value, json};
use tracing::error;

use quill_core::Repo;

use crate::client::Client;
use crate::errors::ApiError;
use crate::models::{Comment, Issue, IssueComment, Quote, ReactionKind};

/// Label marking an issue as a quote.
pub const QUOTE_LABEL: &str = "quote";

/// Label attached to every record created through the tracker.
pub const RECORD_LABEL: &str = "record";

/// Client for the quotes and records kept in one repository.
#[derive(Debug, Clone)]
pub struct IssueTracker {
    client: Client,
    repo: Repo,
}

impl IssueTracker {
    /// Create a tracker for `repo` using `client` for transport.
    pub fn new(client: Client, repo: Repo) -> Self {
        Self { client, repo }
    }

    /// Repository backing this tracker.
    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    fn issues_path(&self) -> String {
        format!("repos/{}/{}/issues", self.repo.owner(), self.repo.name())
    }

    fn issue_path(&self, number: u64) -> String {
        format!("{}/{number}", self.issues_path())
    }

    // --- fallible operations ---

    /// Fetch open issues labeled `quote`, in the order the API returns them.
    pub async fn try_list_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        let path = format!(
            "{}?labels={QUOTE_LABEL}&state=open",
            self.issues_path()
        );
        let issues: Vec<Issue> = self.client.rest(Method::GET, &path, None).await?;
        Ok(issues.into_iter().map(Quote::from).collect())
    }

    /// Fetch the comments on issue `number`.
    pub async fn try_list_comments(&self, number: u64) -> Result<Vec<Comment>, ApiError> {
        check_number(number)?;
        let path = format!("{}/comments", self.issue_path(number));
        let comments: Vec<IssueComment> = self.client.rest(Method::GET, &path, None).await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    /// Post a comment on issue `number`.
    pub async fn try_add_comment(&self, number: u64, body: &str) -> Result<Comment, ApiError> {
        check_number(number)?;
        if body.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "comment body must not be empty".to_string(),
            ));
        }
        let path = format!("{}/comments", self.issue_path(number));
        let payload = json!({ "body": body });
        let created: IssueComment = self
            .client
            .rest(Method::POST, &path, Some(&payload))
            .await?;
        Ok(created.into())
    }

    /// React to issue `number`. Returns the API's reaction object untouched.
    pub async fn try_add_reaction(
        &self,
        number: u64,
        kind: ReactionKind,
    ) -> Result<Value, ApiError> {
        check_number(number)?;
        let path = format!("{}/reactions", self.issue_path(number));
        let payload = json!({ "content": kind });
        self.client.rest(Method::POST, &path, Some(&payload)).await
    }

    /// Open a new issue labeled `record`.
    pub async fn try_create_record(&self, title: &str, body: &str) -> Result<Value, ApiError> {
        let payload = json!({
            "title": title,
            "body": body,
            "labels": [RECORD_LABEL],
        });
        self.client
            .rest(Method::POST, &self.issues_path(), Some(&payload))
            .await
    }

    /// Overwrite the title and body of issue `number`.
    pub async fn try_update_record(
        &self,
        number: u64,
        title: &str,
        body: &str,
    ) -> Result<Value, ApiError> {
        check_number(number)?;
        let payload = json!({ "title": title, "body": body });
        self.client
            .rest(Method::PATCH, &self.issue_path(number), Some(&payload))
            .await
    }

    /// Close issue `number`. Issues cannot be deleted through the API, so
    /// closing stands in for deletion.
    pub async fn try_close_record(&self, number: u64) -> Result<Value, ApiError> {
        check_number(number)?;
        let payload = json!({ "state": "closed" });
        self.client
            .rest(Method::PATCH, &self.issue_path(number), Some(&payload))
            .await
    }

    // --- swallowing operations ---

    /// Like [`Self::try_list_quotes`], empty on failure.
    pub async fn list_quotes(&self) -> Vec<Quote> {
        swallow("list_quotes", self.try_list_quotes().await).unwrap_or_default()
    }

    /// Like [`Self::try_list_comments`], empty on failure.
    pub async fn list_comments(&self, number: u64) -> Vec<Comment> {
        swallow("list_comments", self.try_list_comments(number).await).unwrap_or_default()
    }

    /// Like [`Self::try_add_comment`], `None` on failure.
    pub async fn add_comment(&self, number: u64, body: &str) -> Option<Comment> {
        swallow("add_comment", self.try_add_comment(number, body).await)
    }

    /// Like [`Self::try_add_reaction`], `None` on failure.
    pub async fn add_reaction(&self, number: u64, kind: ReactionKind) -> Option<Value> {
        swallow("add_reaction", self.try_add_reaction(number, kind).await)
    }

    /// Like [`Self::try_create_record`], `None` on failure.
    pub async fn create_record(&self, title: &str, body: &str) -> Option<Value> {
        swallow("create_record", self.try_create_record(title, body).await)
    }

    /// Like [`Self::try_update_record`], `None` on failure.
    pub async fn update_record(&self, number: u64, title: &str, body: &str) -> Option<Value> {
        swallow(
            "update_record",
            self.try_update_record(number, title, body).await,
        )
    }

    /// Like [`Self::try_close_record`], `None` on failure.
    pub async fn close_record(&self, number: u64) -> Option<Value> {
        swallow("close_record", self.try_close_record(number).await)
    }
}

fn check_number(number: u64) -> Result<(), ApiError> {
    if number == 0 {
        return Err(ApiError::InvalidArgument(
            "issue number must be positive".to_string(),
        ));
    }
    Ok(())
}

fn swallow<T>(operation: &'static str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            error!(operation, error = %e, "issue tracker request failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> IssueTracker {
        IssueTracker::new(
            Client::new(reqwest::Client::new(), None),
            Repo::new("sect", "quotes"),
        )
    }

    #[test]
    fn test_should_build_issue_paths() {
        let t = tracker();
        assert_eq!(t.issues_path(), "repos/sect/quotes/issues");
        assert_eq!(t.issue_path(42), "repos/sect/quotes/issues/42");
    }

    #[tokio::test]
    async fn test_should_reject_zero_issue_number_without_request() {
        let t = tracker();
        let err = t.try_list_comments(0).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        let err = t.try_close_record(0).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert!(t.close_record(0).await.is_none());
    }

    #[tokio::test]
    async fn test_should_reject_blank_comment_body() {
        let err = tracker().try_add_comment(3, "  \n").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn test_should_swallow_errors_into_none() {
        let ok: Result<u8, ApiError> = Ok(1);
        assert_eq!(swallow("op", ok), Some(1));
        let err: Result<u8, ApiError> = Err(ApiError::InvalidArgument("x".into()));
        assert_eq!(swallow("op", err), None);
    }
}
