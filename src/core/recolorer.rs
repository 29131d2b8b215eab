use crate::core::compose::{decode_image, recolor_image};
use crate::domain::color::BackgroundColor;
use crate::domain::model::{OutputArtifact, PlannedOutput, ProductEntry, RecolorSummary, SourceVariant};
use crate::domain::ports::{ConfigProvider, ProgressSink, Storage};
use crate::utils::error::{RecolorError, Result};
use crate::utils::monitor::SystemMonitor;
use std::path::Path;

/// Walks the configured entries in order, writing one JPEG per entry and
/// source variant. The first error aborts the batch; files already written
/// stay on disk.
pub struct BatchRecolorer<S: Storage, C: ConfigProvider, P: ProgressSink> {
    storage: S,
    config: C,
    progress: P,
    monitor: SystemMonitor,
}

impl<S: Storage, C: ConfigProvider, P: ProgressSink> BatchRecolorer<S, C, P> {
    pub fn new(storage: S, config: C, progress: P) -> Self {
        Self {
            storage,
            config,
            progress,
            monitor: SystemMonitor::default(),
        }
    }

    pub fn new_with_monitoring(storage: S, config: C, progress: P, monitor_enabled: bool) -> Self {
        Self {
            storage,
            config,
            progress,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn into_progress(self) -> P {
        self.progress
    }

    pub fn run(&mut self) -> Result<RecolorSummary> {
        let Self {
            storage,
            config,
            progress,
            monitor,
        } = self;
        let entries = config.entries();
        let sources = config.sources();
        let quality = config.quality();
        let output_dir = config.output_dir();

        tracing::info!(
            "Recoloring {} entries from {} source image(s) into {}",
            entries.len(),
            sources.len(),
            output_dir.display()
        );

        let mut summary = RecolorSummary::default();

        for (index, entry) in entries.iter().enumerate() {
            let outputs = Self::process_entry(storage, entry, &sources, output_dir, quality)?;

            tracing::info!(
                "✅ [{}] {} -> {} file(s)",
                index,
                entry.identifier,
                outputs.len()
            );
            progress.entry_completed(index, entry, &outputs);
            monitor.log_stats(&format!("Entry {}", index));

            summary.entries_processed += 1;
            summary.outputs.extend(outputs);
        }

        monitor.log_final_stats();
        Ok(summary)
    }

    fn process_entry(
        storage: &S,
        entry: &ProductEntry,
        sources: &[SourceVariant],
        output_dir: &Path,
        quality: u8,
    ) -> Result<Vec<OutputArtifact>> {
        let color = BackgroundColor::from_hex(&entry.color)?;
        let mut outputs = Vec::with_capacity(sources.len());

        for source in sources {
            let output_path = source.output_path(output_dir, &entry.identifier);

            // 每次重新載入來源圖片，處理完即釋放
            let encoded = {
                let image = Self::load_source(storage, &source.path)?;
                tracing::debug!(
                    "Loaded {} ({}x{})",
                    source.path.display(),
                    image.width(),
                    image.height()
                );
                recolor_image(&image, color, quality, &entry.identifier)?
            };

            storage
                .write_file(&output_path, &encoded)
                .map_err(|source| RecolorError::OutputWriteError {
                    path: output_path.display().to_string(),
                    source,
                })?;
            tracing::debug!("Wrote {} bytes to {}", encoded.len(), output_path.display());

            outputs.push(OutputArtifact {
                identifier: entry.identifier.clone(),
                path: output_path,
                bytes: encoded.len(),
            });
        }

        Ok(outputs)
    }

    fn load_source(storage: &S, path: &Path) -> Result<image::DynamicImage> {
        let bytes = storage
            .read_file(path)
            .map_err(|source| RecolorError::ImageLoadError {
                path: path.display().to_string(),
                source: image::ImageError::IoError(source),
            })?;
        decode_image(path, &bytes)
    }

    /// Resolves every output a run would write, without touching any image.
    ///
    /// Colors are parsed in entry order, so this fails on the same entry
    /// `run` would fail on with `InvalidColorFormat`.
    pub fn plan(&self) -> Result<Vec<PlannedOutput>> {
        let sources = self.config.sources();
        let output_dir = self.config.output_dir();
        let mut planned = Vec::new();

        for (index, entry) in self.config.entries().iter().enumerate() {
            let color = BackgroundColor::from_hex(&entry.color)?;
            for source in &sources {
                planned.push(PlannedOutput {
                    index,
                    identifier: entry.identifier.clone(),
                    color: color.to_hex(),
                    source: source.path.clone(),
                    output: source.output_path(output_dir, &entry.identifier),
                });
            }
        }

        Ok(planned)
    }
}
