pub mod compose;
pub mod recolorer;

pub use crate::domain::model::{OutputArtifact, PlannedOutput, ProductEntry, RecolorSummary, SourceVariant};
pub use crate::domain::ports::{ConfigProvider, ProgressSink, Storage};
pub use crate::utils::error::Result;
