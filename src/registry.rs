//! Breathe project registry.
//!
//! Records where the extracted XML index of each project lives. The
//! orchestrator fills it during a hosted build and hands it to the bridge
//! manifest; a local build leaves it empty, which the site compiler reads as
//! "no native API documentation".

use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("project `{0}` is already registered")]
    AlreadyRegistered(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BridgeRegistry {
    default_project: String,
    projects: BTreeMap<String, PathBuf>,
}

impl BridgeRegistry {
    pub fn new(default_project: impl Into<String>) -> Self {
        Self {
            default_project: default_project.into(),
            projects: BTreeMap::new(),
        }
    }

    /// Register the XML index of `project`. Each project is set at most once.
    pub fn register(
        &mut self,
        project: impl Into<String>,
        xml_index: impl Into<PathBuf>,
    ) -> Result<(), RegistryError> {
        let project = project.into();
        if self.projects.contains_key(&project) {
            return Err(RegistryError::AlreadyRegistered(project));
        }
        self.projects.insert(project, xml_index.into());
        Ok(())
    }

    pub fn get(&self, project: &str) -> Option<&Path> {
        self.projects.get(project).map(PathBuf::as_path)
    }

    pub fn default_project(&self) -> &str {
        &self.default_project
    }

    pub fn projects(&self) -> &BTreeMap<String, PathBuf> {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
