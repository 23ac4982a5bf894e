//! Names baked into the generated constant.

/// Field of the blueprint config that holds the Angular settings.
pub const DEFAULT_FIELD: &str = "angularConfig";
/// Angular module the constant is registered on.
pub const DEFAULT_MODULE: &str = "blueprint";
/// Name of the injected constant.
pub const DEFAULT_CONSTANT: &str = "configuration";

/// Which field to project and how to name the generated constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectorSettings {
    /// Top-level field of the input document to project
    pub field: String,
    /// Angular module name passed to `angular.module(...)`
    pub module: String,
    /// Constant name passed to `.constant(...)`
    pub constant: String,
}

impl Default for ProjectorSettings {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            module: DEFAULT_MODULE.to_string(),
            constant: DEFAULT_CONSTANT.to_string(),
        }
    }
}
