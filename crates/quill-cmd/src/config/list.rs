//! `quill config list` command.

use anyhow::Result;
use clap::Args;

use quill_core::config::CONFIG_OPTIONS;
use quill_core::ios_println;

use crate::factory::Factory;

/// Print a list of configuration keys and values.
///
/// Credentials are masked.
#[derive(Debug, Args)]
pub struct ListArgs {}

impl ListArgs {
    /// Run the config list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        let ios = &factory.io;
        let cfg_lock = factory.config()?;
        let cfg = cfg_lock
            .lock()
            .map_err(|e| anyhow::anyhow!("config lock: {e}"))?;

        for option in CONFIG_OPTIONS {
            let mut value = option.current_value(&**cfg);
            if option.is_secret() && !value.is_empty() {
                value = "***".to_string();
            }
            ios_println!(ios, "{}={value}", option.key);
        }

        Ok(())
    }
}
