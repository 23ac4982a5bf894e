//! Angular constant renderer
//!
//! Turns projected entries into the `angular.module(...).constant(...)`
//! declaration the front end loads at startup.

use crate::settings::ProjectorSettings;
use crate::value::ConfigValue;

/// Separator between rendered entries (comma, newline, body indent)
const ENTRY_SEPARATOR: &str = ",\n    ";

/// Template for a single Angular constant declaration
#[derive(Debug, Clone)]
pub struct ConstantTemplate {
    module: String,
    constant: String,
}

impl ConstantTemplate {
    pub fn new(module: impl Into<String>, constant: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            constant: constant.into(),
        }
    }

    pub fn from_settings(settings: &ProjectorSettings) -> Self {
        Self::new(settings.module.clone(), settings.constant.clone())
    }

    /// Render entries in the given order. The result has no trailing newline.
    pub fn render(&self, entries: &[(String, ConfigValue)]) -> String {
        let lines: Vec<String> = entries
            .iter()
            .map(|(key, value)| render_entry(key, value))
            .collect();

        format!(
            "angular.module('{}').constant('{}', {{\n    {}\n}});",
            self.module,
            self.constant,
            lines.join(ENTRY_SEPARATOR)
        )
    }
}

impl Default for ConstantTemplate {
    fn default() -> Self {
        Self::from_settings(&ProjectorSettings::default())
    }
}

/// `key: "value"`, with no escaping of the value
fn render_entry(key: &str, value: &ConfigValue) -> String {
    format!("{}: \"{}\"", key, value)
}
