//! Documentation build orchestration.
//!
//! # Architecture
//!
//! ```text
//! run()
//!     │
//!     ├── BuildMode::detect() ──local──► BuildReport { Skipped, empty registry }
//!     │       │hosted
//!     │       ▼
//!     ├── template::resolve()   docs/Doxyfile.in → docs/Doxyfile   (fatal on error)
//!     │
//!     ├── Extractor::extract()  doxygen docs/Doxyfile              (never fatal)
//!     │
//!     └── BridgeRegistry::register(project, docs/doxygen/xml)
//! ```
//!
//! The XML path is registered even when the extractor failed: the site
//! compiler then finds an empty or missing index, which it tolerates.

use crate::{
    config::{DocsConfig, HostedConfig},
    exec, log,
    registry::BridgeRegistry,
    template,
    utils::exec::{DOXYGEN_FILTER, locate},
};
use anyhow::{Context, Result};
use std::{collections::HashMap, fmt, path::Path};

/// Source of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Local,
    Hosted,
}

impl BuildMode {
    /// Hosted only when the signal variable equals the enabling literal exactly.
    pub fn detect(env: &impl EnvSource, hosted: &HostedConfig) -> Self {
        if hosted.force {
            return Self::Hosted;
        }
        match env.var(&hosted.env_var) {
            Some(value) if value == hosted.enable_value => Self::Hosted,
            _ => Self::Local,
        }
    }
}

/// Per-build inputs of the extraction step. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub is_hosted_build: bool,
    pub input_directories: Vec<String>,
    pub output_directory: String,
}

impl BuildContext {
    pub fn new(mode: BuildMode, config: &DocsConfig) -> Self {
        Self {
            is_hosted_build: mode == BuildMode::Hosted,
            input_directories: config.doxygen.inputs.clone(),
            output_directory: config.doxygen.output.clone(),
        }
    }
}

/// Result of the extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Local build; the extractor was not run.
    Skipped,
    Success,
    /// Launch failure or non-zero exit.
    Failed { reason: String },
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => f.write_str("skipped"),
            Self::Success => f.write_str("success"),
            Self::Failed { .. } => f.write_str("failed"),
        }
    }
}

/// Runs the API extractor against a resolved Doxyfile.
pub trait Extractor {
    /// Blocks until the extractor exits. `doxyfile` is relative to `root`.
    fn extract(&self, root: &Path, doxyfile: &Path) -> ExtractionOutcome;
}

/// The real extractor: the configured `[doxygen.command]`.
pub struct Doxygen<'a> {
    command: &'a [String],
}

impl<'a> Doxygen<'a> {
    pub const fn new(command: &'a [String]) -> Self {
        Self { command }
    }
}

impl Extractor for Doxygen<'_> {
    fn extract(&self, root: &Path, doxyfile: &Path) -> ExtractionOutcome {
        if let Err(err) = locate(self.command) {
            log!("warn"; "{:#}", err);
        }

        match exec!(filter=&DOXYGEN_FILTER; root; self.command; doxyfile) {
            Ok(_) => ExtractionOutcome::Success,
            Err(err) => ExtractionOutcome::Failed {
                reason: format!("{err:#}"),
            },
        }
    }
}

/// Everything a build produced, handed to the bridge manifest.
#[derive(Debug)]
pub struct BuildReport {
    pub context: BuildContext,
    pub extraction: ExtractionOutcome,
    pub registry: BridgeRegistry,
}

/// Run the build pipeline.
///
/// # Errors
/// Only template resolution errors are returned; extractor failures are
/// logged and recorded in [`BuildReport::extraction`].
pub fn run(config: &DocsConfig, env: &impl EnvSource, extractor: &impl Extractor) -> Result<BuildReport> {
    let mode = BuildMode::detect(env, &config.hosted);
    let context = BuildContext::new(mode, config);
    let mut registry = BridgeRegistry::new(&config.project.name);

    if !context.is_hosted_build {
        log!(
            "build";
            "local build (`{}` != `{}`), skipping doxygen",
            config.hosted.env_var,
            config.hosted.enable_value
        );
        return Ok(BuildReport {
            context,
            extraction: ExtractionOutcome::Skipped,
            registry,
        });
    }

    let doxyfile = &config.doxygen.doxyfile;
    template::resolve(
        &config.path(&config.doxygen.template),
        &config.path(doxyfile),
        &context.input_directories,
        &config.doxygen.delimiter,
        &context.output_directory,
    )
    .context("Cannot prepare the Doxyfile, the API extractor has nothing to run against")?;
    log!("doxygen"; "resolved {}", doxyfile.display());

    let extraction = extractor.extract(&config.root, doxyfile);
    match &extraction {
        ExtractionOutcome::Failed { reason } => {
            log!("warn"; "doxygen failed, native API docs may be missing\n{}", reason);
        }
        _ => log!("doxygen"; "done"),
    }

    let xml_index = config.xml_index();
    registry.register(&config.project.name, xml_index)?;

    Ok(BuildReport {
        context,
        extraction,
        registry,
    })
}
