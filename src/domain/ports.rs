use crate::domain::model::{OutputArtifact, ProductEntry, SourceVariant};
use std::io;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

pub trait ConfigProvider {
    fn sources(&self) -> Vec<SourceVariant>;
    fn output_dir(&self) -> &Path;
    fn entries(&self) -> &[ProductEntry];
    fn quality(&self) -> u8;
}

/// Receives one notification per fully processed entry.
pub trait ProgressSink {
    fn entry_completed(&mut self, index: usize, entry: &ProductEntry, outputs: &[OutputArtifact]);
}
