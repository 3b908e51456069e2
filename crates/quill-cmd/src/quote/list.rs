//! `quill quote list` command.

use anyhow::{Context, Result};
use clap::Args;

use quill_core::{ios_eprintln, ios_println};
use quill_core::table::TablePrinter;
use quill_core::text;

/// List open quotes.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,

    /// Maximum number of quotes to show.
    #[arg(short = 'L', long, default_value = "30")]
    limit: usize,

    /// Output JSON with the specified fields, or every field when none are listed.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    json: Option<Vec<String>>,
}

impl ListArgs {
    /// Run the quote list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be resolved or the API
    /// request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        let tracker = factory.tracker(self.repo.as_deref())?;
        let mut quotes = tracker
            .try_list_quotes()
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .context("failed to list quotes")?;
        quotes.truncate(self.limit);

        let ios = &factory.io;

        if let Some(ref fields) = self.json {
            let value = serde_json::to_value(&quotes).context("failed to serialize JSON")?;
            let fields: Vec<String> = fields.iter().filter(|f| !f.is_empty()).cloned().collect();
            let json_output = serde_json::to_string_pretty(&select_fields(value, &fields))
                .context("failed to serialize JSON")?;
            ios_println!(ios, "{json_output}");
            return Ok(());
        }

        if quotes.is_empty() {
            ios_eprintln!(
                ios,
                "No quotes found in {}",
                tracker.repo().full_name()
            );
            return Ok(());
        }

        let cs = ios.color_scheme();
        let is_tty = ios.is_stdout_tty();
        let mut tp = TablePrinter::new(ios).with_headers(&[
            "number", "quote", "source", "school", "votes", "comments", "created",
        ]);

        for quote in &quotes {
            let score = quote.votes.score();
            let votes = if score > 0 {
                cs.success(&format!("+{score}"))
            } else {
                score.to_string()
            };
            tp.add_row(vec![
                format!("#{}", quote.number),
                text::truncate(&text::single_line(&quote.text), 60),
                text::truncate(&text::single_line(&quote.source), 40),
                cs.cyan(&quote.school),
                votes,
                quote.comments_count.to_string(),
                text::relative_time_str(&quote.created_at, is_tty),
            ]);
        }

        ios_println!(ios, "{}", tp.render());
        Ok(())
    }
}

/// Keep only `fields` of each JSON object; an empty list keeps everything.
fn select_fields(value: serde_json::Value, fields: &[String]) -> serde_json::Value {
    use serde_json::Value;

    if fields.is_empty() {
        return value;
    }
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| select_fields(item, fields))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(k, _)| fields.iter().any(|f| f == k))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{TestHarness, mock_quote_list, quote_issue_fixture};

    fn default_args() -> ListArgs {
        ListArgs {
            repo: None,
            limit: 30,
            json: None,
        }
    }

    fn two_quotes() -> serde_json::Value {
        serde_json::json!([
            quote_issue_fixture(7, "The way that can be told", "source: Tao Te Ching\ncategory: Taoism"),
            quote_issue_fixture(4, "Sitting quietly", "category: Zen"),
        ])
    }

    #[test]
    fn test_should_select_json_fields() {
        let value = serde_json::json!([{ "number": 1, "text": "a", "school": "Zen" }]);
        let fields = vec!["number".to_string(), "school".to_string()];
        assert_eq!(
            select_fields(value, &fields),
            serde_json::json!([{ "number": 1, "school": "Zen" }])
        );
    }

    #[tokio::test]
    async fn test_should_list_quotes_as_tab_separated_rows() {
        let h = TestHarness::new().await;
        mock_quote_list(&h.server, two_quotes()).await;

        default_args().run(&h.factory).await.unwrap();

        let out = h.stdout();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2, "one row per quote: {out}");
        assert!(lines[0].starts_with("#7\tThe way that can be told\tTao Te Ching\tTaoism\t+4\t2\t"));
        assert!(lines[1].contains("\tSitting quietly\tcategory: Zen\tZen\t"));
    }

    #[tokio::test]
    async fn test_should_truncate_to_limit() {
        let h = TestHarness::new().await;
        mock_quote_list(&h.server, two_quotes()).await;

        let mut args = default_args();
        args.limit = 1;
        args.run(&h.factory).await.unwrap();

        assert_eq!(h.stdout().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_should_output_selected_json_fields() {
        let h = TestHarness::new().await;
        mock_quote_list(&h.server, two_quotes()).await;

        let mut args = default_args();
        args.json = Some(vec!["number".to_string(), "school".to_string()]);
        args.run(&h.factory).await.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&h.stdout()).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "number": 7, "school": "Taoism" },
                { "number": 4, "school": "Zen" }
            ])
        );
    }

    #[tokio::test]
    async fn test_should_output_all_json_fields() {
        let h = TestHarness::new().await;
        mock_quote_list(&h.server, two_quotes()).await;

        let mut args = default_args();
        args.json = Some(vec![]);
        args.run(&h.factory).await.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&h.stdout()).unwrap();
        assert_eq!(parsed[0]["author"], "testuser");
        assert_eq!(parsed[0]["votes"]["upvotes"], 5);
        assert_eq!(parsed[0]["comments_count"], 2);
    }

    #[tokio::test]
    async fn test_should_report_empty_list() {
        let h = TestHarness::new().await;
        mock_quote_list(&h.server, serde_json::json!([])).await;

        default_args().run(&h.factory).await.unwrap();

        assert!(h.stdout().is_empty());
        assert!(h.stderr().contains("No quotes found in sect/quotes"));
    }

    #[tokio::test]
    async fn test_should_fail_on_server_error() {
        let h = TestHarness::new().await;
        crate::test_helpers::mock_rest_get(
            &h.server,
            "/repos/sect/quotes/issues",
            500,
            serde_json::json!({ "message": "boom" }),
        )
        .await;

        let err = default_args().run(&h.factory).await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to list quotes"));
    }

    #[tokio::test]
    async fn test_should_use_repo_flag() {
        let h = TestHarness::new().await;
        crate::test_helpers::mock_rest_get(
            &h.server,
            "/repos/other/sayings/issues",
            200,
            serde_json::json!([]),
        )
        .await;

        let mut args = default_args();
        args.repo = Some("other/sayings".to_string());
        args.run(&h.factory).await.unwrap();

        assert!(h.stderr().contains("No quotes found in other/sayings"));
    }
}
