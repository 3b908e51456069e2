//! `quill config set` command.

use anyhow::{Context, Result};
use clap::Args;

use quill_core::config;

use crate::factory::Factory;

/// Update configuration with a value for the given key.
///
/// An empty value clears the key.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// The configuration key to set.
    key: String,
    /// The value to set.
    value: String,
}

impl SetArgs {
    /// Run the config set command.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value is invalid, or the
    /// file cannot be saved.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        if !self.value.is_empty() {
            config::validate_value(&self.key, &self.value)
                .with_context(|| format!("failed to set {:?}", self.key))?;
        }

        let cfg_lock = factory.config()?;
        let mut cfg = cfg_lock
            .lock()
            .map_err(|e| anyhow::anyhow!("config lock: {e}"))?;

        cfg.set(&self.key, &self.value)
            .with_context(|| format!("failed to set {:?}", self.key))?;
        cfg.write().context("failed to save configuration")?;
        tracing::debug!(key = %self.key, "configuration updated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_helpers::TestHarness;

    fn args(key: &str, value: &str) -> SetArgs {
        SetArgs {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn current(h: &TestHarness, key: &str) -> Option<String> {
        let cfg = h.factory.config().unwrap().lock().unwrap();
        cfg.get(key)
    }

    #[tokio::test]
    async fn test_should_set_repo() {
        let h = TestHarness::new().await;
        args("repo", "other/journal").run(&h.factory).unwrap();
        assert!(h.stdout().is_empty());
        assert_eq!(current(&h, "repo").as_deref(), Some("other/journal"));
    }

    #[tokio::test]
    async fn test_should_store_api_url_as_given() {
        let h = TestHarness::new().await;
        args("api_url", "https://ghe.example.com/api/v3")
            .run(&h.factory)
            .unwrap();
        assert_eq!(
            current(&h, "api_url").as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
    }

    #[tokio::test]
    async fn test_should_clear_with_empty_value() {
        let h = TestHarness::new().await;
        args("repo", "").run(&h.factory).unwrap();
        assert!(current(&h, "repo").unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_repo() {
        let h = TestHarness::new().await;
        let err = args("repo", "just-a-name").run(&h.factory).unwrap_err();
        assert!(format!("{err:#}").contains("failed to set \"repo\""));
        assert_eq!(current(&h, "repo").as_deref(), Some("sect/quotes"));
    }

    #[tokio::test]
    async fn test_should_reject_bad_timeout() {
        let h = TestHarness::new().await;
        assert!(args("http_timeout", "0").run(&h.factory).is_err());
        assert!(args("http_timeout", "soon").run(&h.factory).is_err());
        args("http_timeout", "15").run(&h.factory).unwrap();
    }

    #[tokio::test]
    async fn test_should_reject_unknown_key() {
        let h = TestHarness::new().await;
        let err = args("editor", "vim").run(&h.factory).unwrap_err();
        assert!(format!("{err:#}").contains("editor"));
    }
}
