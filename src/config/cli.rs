use super::{validate_job, DEFAULT_OUTPUT_DIR};
use crate::core::compose::DEFAULT_JPEG_QUALITY;
use crate::core::{ConfigProvider, ProductEntry, SourceVariant};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "product-recolor")]
#[command(about = "Put a product image on solid background colors and save each as JPEG")]
pub struct CliConfig {
    /// Path to a TOML job file; the flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source image to recolor
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory the JPEG files are written to [default: ./output]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Entry to process, repeatable
    #[arg(long = "entry", value_name = "ID=#RRGGBB", value_parser = parse_entry)]
    pub entries: Vec<ProductEntry>,

    /// JPEG quality [default: 90]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Show what would be written without loading or writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log CPU and memory usage after each entry
    #[arg(long)]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Parses `ID=#RRGGBB`. The color itself is checked when the entry runs.
pub fn parse_entry(value: &str) -> std::result::Result<ProductEntry, String> {
    let (identifier, color) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=#RRGGBB, got '{}'", value))?;
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(format!("missing identifier in '{}'", value));
    }
    Ok(ProductEntry::new(identifier, color.trim()))
}

impl ConfigProvider for CliConfig {
    fn sources(&self) -> Vec<SourceVariant> {
        self.source.iter().cloned().map(SourceVariant::new).collect()
    }

    fn output_dir(&self) -> &Path {
        self.output_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR))
    }

    fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    fn quality(&self) -> u8 {
        self.quality.unwrap_or(DEFAULT_JPEG_QUALITY)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_job(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RecolorError;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::try_parse_from([
            "product-recolor",
            "--source",
            "biometal.png",
            "--output-dir",
            "/tmp/Productos",
            "--entry",
            "d13be0da-b7c1-4a50-b720-d27c72da6bb8=#ffffff",
            "--entry",
            "other=#000",
        ])
        .unwrap();

        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[1], ProductEntry::new("other", "#000"));
        assert_eq!(config.output_dir(), Path::new("/tmp/Productos"));
        assert_eq!(config.quality(), 90);
        assert_eq!(config.sources(), vec![SourceVariant::new("biometal.png")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = CliConfig::try_parse_from(["product-recolor"]).unwrap();
        assert_eq!(config.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert!(config.entries().is_empty());
        assert!(matches!(
            config.validate(),
            Err(RecolorError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_quality() {
        assert!(CliConfig::try_parse_from(["product-recolor", "--quality", "0"]).is_err());
        assert!(CliConfig::try_parse_from(["product-recolor", "--quality", "101"]).is_err());
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("abc = #ffffff").unwrap(),
            ProductEntry::new("abc", "#ffffff")
        );
        assert!(parse_entry("abc").is_err());
        assert!(parse_entry("=#ffffff").is_err());
        // color is not checked here
        assert_eq!(parse_entry("abc=notacolor").unwrap().color, "notacolor");
    }

    #[test]
    fn test_validate_rejects_unsafe_identifier() {
        let config = CliConfig {
            source: Some(PathBuf::from("biometal.png")),
            entries: vec![ProductEntry::new("../escape", "#ffffff")],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RecolorError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_leaves_source_format_to_decoder() {
        for source in ["biometal", "missing.bmp", "biometal.tiff"] {
            let config = CliConfig {
                source: Some(PathBuf::from(source)),
                entries: vec![ProductEntry::new("abc", "#ffffff")],
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "rejected {}", source);
        }
    }
}
