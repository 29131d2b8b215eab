pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleProgress, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use crate::core::{compose::DEFAULT_JPEG_QUALITY, recolorer::BatchRecolorer};
pub use domain::color::BackgroundColor;
pub use domain::model::{OutputArtifact, PlannedOutput, ProductEntry, RecolorSummary, SourceVariant};
pub use utils::error::{RecolorError, Result};
