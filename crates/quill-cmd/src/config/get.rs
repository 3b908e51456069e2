//! `quill config get` command.

use anyhow::Result;
use clap::Args;

use quill_core::config;
use quill_core::ios_println;

use crate::factory::Factory;

/// Print the value of a given configuration key.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// The configuration key to read.
    key: String,
}

impl GetArgs {
    /// Run the config get command.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        let Some(option) = config::option(&self.key) else {
            anyhow::bail!("unknown configuration key {:?}", self.key);
        };

        let ios = &factory.io;
        let cfg_lock = factory.config()?;
        let cfg = cfg_lock
            .lock()
            .map_err(|e| anyhow::anyhow!("config lock: {e}"))?;

        let value = option.current_value(&**cfg);
        if !value.is_empty() {
            ios_println!(ios, "{value}");
        }
        Ok(())
    }
}
