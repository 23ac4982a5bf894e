//! blueprint-config library
//!
//! Projects the `angularConfig` section of the blueprint config into the
//! Angular constant consumed by the front end.

pub mod error;
pub mod projector;
pub mod render;
pub mod settings;
pub mod value;

pub use error::ProjectError;
pub use projector::{extract_entries, load_document, project, ProjectionSummary, Projector};
pub use render::ConstantTemplate;
pub use settings::ProjectorSettings;
pub use value::ConfigValue;
