//! `[project]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[project]` section in doxbridge.toml - names the Breathe project.
///
/// # Example
/// ```toml
/// [project]
/// name = "vr-modeling"
/// manifest = "docs/_build/doxbridge.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project key the extracted XML is registered under.
    /// Also becomes `breathe_default_project`.
    #[serde(default = "defaults::project::name")]
    #[educe(Default = defaults::project::name())]
    pub name: String,

    /// Where the bridge manifest is written (relative to root).
    #[serde(default = "defaults::project::manifest")]
    #[educe(Default = defaults::project::manifest())]
    pub manifest: PathBuf,
}
