//! Documentation build configuration for `doxbridge.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[project]`  | Breathe project name, bridge manifest path       |
//! | `[hosted]`   | How a hosted build is detected                   |
//! | `[doxygen]`  | Template, inputs and output of the API extractor |
//! | `[xref]`     | Cross-reference tables for external C# types     |
//!
//! Every field has a default, so a project without `doxbridge.toml` builds
//! with the historical settings.
//!
//! # Example
//!
//! ```toml
//! [hosted]
//! env_var = "READTHEDOCS"
//!
//! [doxygen]
//! inputs = ["Interface/source", "Assets/Scripts"]
//! output = "docs/doxygen"
//!
//! [xref]
//! ignore = ["Vector2", "Vector3"]
//! ```

pub mod defaults;
mod doxygen;
mod error;
mod hosted;
mod project;
mod xref;

pub use doxygen::DoxygenConfig;
pub use error::ConfigError;
pub use hosted::HostedConfig;
pub use project::ProjectConfig;
pub use xref::{XrefConfig, XrefGroup};

use crate::cli::{Cli, Commands};
use crate::xref::XrefTable;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing doxbridge.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Project root; every relative path below is resolved against it.
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub hosted: HostedConfig,

    #[serde(default)]
    pub doxygen: DoxygenConfig,

    #[serde(default)]
    pub xref: XrefConfig,
}

impl DocsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: DocsConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Absolute-or-root-relative location of a configured path.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Path of the XML index the extractor produces, as registered with Breathe.
    ///
    /// Kept relative to the root: the site compiler runs from there too.
    pub fn xml_index(&self) -> PathBuf {
        Path::new(&self.doxygen.output).join(&self.doxygen.xml_subdir)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(root) = &cli.root {
            let expanded = shellexpand::tilde(&root.to_string_lossy()).into_owned();
            self.root = PathBuf::from(expanded);
        }
        self.config_path = self.root.join(&cli.config);

        if let Commands::Build { hosted: true } = cli.command {
            self.hosted.force = true;
        }
    }

    /// Validate configuration.
    ///
    /// Checks the extractor settings and builds the cross-reference table once
    /// so that ambiguous aliases or broken URL templates fail early.
    pub fn validate(&self) -> Result<()> {
        if self.hosted.env_var.is_empty() {
            bail!(ConfigError::Validation("[hosted.env_var] must not be empty".into()));
        }

        if self.doxygen.command.is_empty() {
            bail!(ConfigError::Validation(
                "[doxygen.command] must have at least one element".into()
            ));
        }

        if self.doxygen.inputs.is_empty() {
            bail!(ConfigError::Validation(
                "[doxygen.inputs] must have at least one element".into()
            ));
        }

        if self.doxygen.output.is_empty() {
            bail!(ConfigError::Validation("[doxygen.output] must not be empty".into()));
        }

        if self.doxygen.template == self.doxygen.doxyfile {
            bail!(ConfigError::Validation(
                "[doxygen.doxyfile] must differ from [doxygen.template]".into()
            ));
        }

        XrefTable::from_config(&self.xref)
            .map_err(|err| ConfigError::Validation(format!("[xref] {err}")))?;

        Ok(())
    }
}
