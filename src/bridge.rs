//! Bridge manifest written for the site compiler.
//!
//! The Sphinx side of the build reads one JSON file instead of importing
//! anything from here. Keys are named after the settings they feed
//! (`breathe_projects`, `sphinx_csharp_*`) and carry the same shapes:
//!
//! ```text
//! csharp_ext_search_pages  group → [type_page, search_page]
//! csharp_ext_type_map      group → namespace → [alias, ...]
//! ```

use crate::{
    build::{BuildReport, ExtractionOutcome},
    config::DocsConfig,
    xref::XrefTable,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Serialize)]
pub struct BridgeManifest<'a> {
    pub hosted: bool,
    pub extraction: String,
    /// Why the extractor failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<&'a str>,
    pub breathe_projects: &'a BTreeMap<String, PathBuf>,
    pub breathe_default_project: &'a str,
    /// Mirrors `hosted`: links are only checked on the published site.
    pub csharp_test_links: bool,
    pub csharp_ignore_xref: &'a [String],
    pub csharp_ext_search_pages: BTreeMap<&'a str, [&'a str; 2]>,
    pub csharp_ext_type_map: BTreeMap<&'a str, &'a BTreeMap<String, Vec<String>>>,
    pub csharp_external_type_rename: &'a BTreeMap<String, String>,
}

impl<'a> BridgeManifest<'a> {
    pub fn new(config: &'a DocsConfig, report: &'a BuildReport, xref: &'a XrefTable) -> Self {
        Self {
            hosted: report.context.is_hosted_build,
            extraction: report.extraction.to_string(),
            extraction_error: match &report.extraction {
                ExtractionOutcome::Failed { reason } => Some(reason.as_str()),
                _ => None,
            },
            breathe_projects: report.registry.projects(),
            breathe_default_project: report.registry.default_project(),
            csharp_test_links: report.context.is_hosted_build,
            csharp_ignore_xref: &config.xref.ignore,
            csharp_ext_search_pages: xref
                .pages()
                .iter()
                .map(|(group, pages)| {
                    (group.as_str(), [pages.type_page.as_str(), pages.search_page.as_str()])
                })
                .collect(),
            csharp_ext_type_map: config
                .xref
                .groups
                .iter()
                .map(|(group, entry)| (group.as_str(), &entry.namespaces))
                .collect(),
            csharp_external_type_rename: &config.xref.rename,
        }
    }

    /// Write the manifest as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write bridge manifest {}", path.display()))?;
        Ok(())
    }
}
