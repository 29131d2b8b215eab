#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{RecolorError, Result};
use crate::utils::validation::{
    duplicate_values, validate_file_extension, validate_filename_component, validate_identifier,
    validate_path, validate_range, validate_unique, SUPPORTED_SOURCE_EXTENSIONS,
};

#[cfg(feature = "cli")]
pub use cli::{parse_entry, CliConfig};

pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Checks shared by every config source. Colors are left to the run itself
/// so entries before a bad color still get written.
pub fn validate_job<C: ConfigProvider>(config: &C) -> Result<()> {
    let sources = config.sources();
    if sources.is_empty() {
        return Err(RecolorError::MissingConfigError {
            field: "source".to_string(),
        });
    }

    for source in &sources {
        validate_path("source.path", &source.path)?;
        // 格式由檔案內容判斷，副檔名只做提示
        if let Err(e) =
            validate_file_extension("source.path", &source.path, &SUPPORTED_SOURCE_EXTENSIONS)
        {
            tracing::warn!("{}", e);
        }
        validate_filename_component("source.variants.suffix", &source.suffix)?;
    }
    validate_unique(
        "source.variants.suffix",
        sources.iter().map(|s| s.suffix.as_str()),
    )?;

    validate_path("output.dir", config.output_dir())?;
    validate_range("output.quality", config.quality(), 1, 100)?;

    for entry in config.entries() {
        validate_identifier("entries.identifier", &entry.identifier)?;
    }

    // 重複的 identifier 只警告，後面的輸出會覆寫前面的
    for duplicate in duplicate_values(config.entries().iter().map(|e| e.identifier.as_str())) {
        tracing::warn!(
            "Identifier '{}' appears more than once; later entries overwrite earlier output",
            duplicate
        );
    }

    Ok(())
}
