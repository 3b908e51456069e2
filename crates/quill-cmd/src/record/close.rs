//! `quill record close` command.

use anyhow::{Context, Result};
use clap::Args;

use quill_core::text;
use quill_core::{ios_eprintln, ios_println};

/// Close a record.
#[derive(Debug, Args)]
pub struct CloseArgs {
    /// Issue number of the record.
    #[arg(value_name = "NUMBER")]
    number: u64,

    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,
}

impl CloseArgs {
    /// Run the record close command.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be resolved or the API
    /// request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        let tracker = factory.tracker(self.repo.as_deref())?;
        let closed = tracker
            .try_close_record(self.number)
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .with_context(|| format!("failed to close record #{}", self.number))?;

        let ios = &factory.io;
        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} Closed record #{} in {}",
            cs.success_icon(),
            self.number,
            cs.bold(&tracker.repo().full_name()),
        );
        ios_println!(ios, "{}", text::display_url(super::html_url(&closed)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        TestHarness, last_request_body, mock_rest_patch, record_issue_fixture,
    };

    fn default_args(number: u64) -> CloseArgs {
        CloseArgs { number, repo: None }
    }

    #[tokio::test]
    async fn test_should_close_record() {
        let h = TestHarness::new().await;
        mock_rest_patch(
            &h.server,
            "/repos/sect/quotes/issues/42",
            200,
            record_issue_fixture(42, "Old entry", "closed"),
        )
        .await;

        default_args(42).run(&h.factory).await.unwrap();

        assert_eq!(
            last_request_body(&h.server).await,
            serde_json::json!({ "state": "closed" })
        );
        assert!(h.stderr().contains("Closed record #42 in sect/quotes"));
        assert!(h.stdout().contains("github.com/sect/quotes/issues/42"));
    }

    #[tokio::test]
    async fn test_should_close_record_in_flagged_repo() {
        let h = TestHarness::new().await;
        mock_rest_patch(
            &h.server,
            "/repos/other/journal/issues/8",
            200,
            serde_json::json!({ "html_url": "https://github.com/other/journal/issues/8" }),
        )
        .await;

        let args = CloseArgs {
            number: 8,
            repo: Some("other/journal".to_string()),
        };
        args.run(&h.factory).await.unwrap();

        assert!(h.stderr().contains("other/journal"));
    }

    #[tokio::test]
    async fn test_should_fail_when_record_missing() {
        let h = TestHarness::new().await;
        mock_rest_patch(
            &h.server,
            "/repos/sect/quotes/issues/99",
            404,
            serde_json::json!({ "message": "Not Found" }),
        )
        .await;

        let err = default_args(99).run(&h.factory).await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to close record #99"));
    }
}
