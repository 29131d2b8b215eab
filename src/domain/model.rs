use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of the batch: output filename stem plus background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub identifier: String,
    pub color: String,
}

impl ProductEntry {
    pub fn new(identifier: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            color: color.into(),
        }
    }
}

/// A source image and the suffix appended to the identifier of its outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceVariant {
    pub path: PathBuf,
    #[serde(default)]
    pub suffix: String,
}

impl SourceVariant {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            suffix: String::new(),
        }
    }

    pub fn with_suffix(path: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            suffix: suffix.into(),
        }
    }

    /// `{output_dir}/{identifier}{suffix}.jpg`
    pub fn output_path(&self, output_dir: &Path, identifier: &str) -> PathBuf {
        output_dir.join(format!("{}{}.jpg", identifier, self.suffix))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub identifier: String,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RecolorSummary {
    pub entries_processed: usize,
    pub outputs: Vec<OutputArtifact>,
}

/// A single output a run would produce; nothing has been loaded or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutput {
    pub index: usize,
    pub identifier: String,
    pub color: String,
    pub source: PathBuf,
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_uses_identifier_and_suffix() {
        let dir = Path::new("/tmp/Productos");
        let plain = SourceVariant::new("biometal.png");
        assert_eq!(
            plain.output_path(dir, "abc"),
            PathBuf::from("/tmp/Productos/abc.jpg")
        );

        let mockup = SourceVariant::with_suffix("mockup-3.png", "-3");
        assert_eq!(
            mockup.output_path(dir, "abc"),
            PathBuf::from("/tmp/Productos/abc-3.jpg")
        );
    }
}
