//! Config projector
//!
//! Reads the blueprint config, pulls out the Angular settings object and
//! writes it as an Angular constant. Everything is rendered in memory before
//! the output path is touched, so a bad input never clobbers a previous build.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{kind_of, ProjectError, Result};
use crate::render::ConstantTemplate;
use crate::settings::ProjectorSettings;
use crate::value::ConfigValue;

/// Outcome of a successful projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSummary {
    /// Number of entries written to the constant
    pub entries: usize,
    /// Path the constant was written to
    pub output: PathBuf,
}

/// Read and parse a JSON document from disk
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| ProjectError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ProjectError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract the configured field's entries, in document order
pub fn extract_entries(
    document: &Value,
    settings: &ProjectorSettings,
) -> Result<Vec<(String, ConfigValue)>> {
    let root = document
        .as_object()
        .ok_or_else(|| ProjectError::RootNotObject(kind_of(document)))?;

    let field = root
        .get(&settings.field)
        .ok_or_else(|| ProjectError::MissingField(settings.field.clone()))?;

    let object = field.as_object().ok_or_else(|| ProjectError::FieldNotObject {
        field: settings.field.clone(),
        kind: kind_of(field),
    })?;

    object
        .iter()
        .map(|(key, value)| ConfigValue::from_json(key, value).map(|v| (key.clone(), v)))
        .collect()
}

/// Projects a blueprint config into an Angular constant file
#[derive(Debug, Clone, Default)]
pub struct Projector {
    settings: ProjectorSettings,
}

impl Projector {
    pub fn new(settings: ProjectorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProjectorSettings {
        &self.settings
    }

    /// Render the constant for `input` without writing anything
    pub fn render(&self, input: &Path) -> Result<(String, usize)> {
        let document = load_document(input)?;
        debug!(input = %input.display(), "parsed blueprint config");

        let entries = extract_entries(&document, &self.settings)?;
        debug!(field = %self.settings.field, count = entries.len(), "extracted entries");

        let text = ConstantTemplate::from_settings(&self.settings).render(&entries);
        Ok((text, entries.len()))
    }

    /// read -> parse -> project -> render -> write
    pub fn project(&self, input: &Path, output: &Path) -> Result<ProjectionSummary> {
        let (text, entries) = self.render(input)?;

        fs::write(output, text).map_err(|source| ProjectError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;
        info!(output = %output.display(), entries, "wrote angular config");

        Ok(ProjectionSummary {
            entries,
            output: output.to_path_buf(),
        })
    }
}

/// Project with the default field, module and constant names
pub fn project(input: &Path, output: &Path) -> Result<ProjectionSummary> {
    Projector::default().project(input, output)
}
