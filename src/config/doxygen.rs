//! `[doxygen]` section configuration.
//!
//! Everything the hosted build needs to drive the API extractor: the
//! template to resolve, the directories to scan, and where the XML lands.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[doxygen]` section in doxbridge.toml.
///
/// # Example
/// ```toml
/// [doxygen]
/// command = ["doxygen"]
/// template = "docs/Doxyfile.in"
/// doxyfile = "docs/Doxyfile"
/// inputs = ["Interface/source", "Assets/Scripts"]
/// output = "docs/doxygen"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DoxygenConfig {
    /// Extractor command and leading arguments; the doxyfile path is appended.
    #[serde(default = "defaults::doxygen::command")]
    #[educe(Default = defaults::doxygen::command())]
    pub command: Vec<String>,

    /// Doxyfile template containing the placeholder tokens (relative to root).
    #[serde(default = "defaults::doxygen::template")]
    #[educe(Default = defaults::doxygen::template())]
    pub template: PathBuf,

    /// Resolved Doxyfile written from `template` (relative to root).
    #[serde(default = "defaults::doxygen::doxyfile")]
    #[educe(Default = defaults::doxygen::doxyfile())]
    pub doxyfile: PathBuf,

    /// Source directories handed to the extractor, in order.
    #[serde(default = "defaults::doxygen::inputs")]
    #[educe(Default = defaults::doxygen::inputs())]
    pub inputs: Vec<String>,

    /// Extractor output directory, as written into the Doxyfile.
    #[serde(default = "defaults::doxygen::output")]
    #[educe(Default = defaults::doxygen::output())]
    pub output: String,

    /// Subdirectory of `output` holding the XML index read by Breathe.
    #[serde(default = "defaults::doxygen::xml_subdir")]
    #[educe(Default = defaults::doxygen::xml_subdir())]
    pub xml_subdir: String,

    /// Separator between entries of `inputs` in the resolved Doxyfile.
    #[serde(default = "defaults::doxygen::delimiter")]
    #[educe(Default = defaults::doxygen::delimiter())]
    pub delimiter: String,
}
