//! Config initialization.
//!
//! Writes a `doxbridge.toml` holding every default, so the tables can be
//! edited in place.

use crate::{config::DocsConfig, log};
use anyhow::{Context, Result, bail};
use std::fs;

/// Write the default configuration to `config.config_path`.
pub fn new_config(config: &DocsConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different root.",
            path.display()
        );
    }

    let content = toml::to_string_pretty(&DocsConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
