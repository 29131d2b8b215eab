use crate::core::compose::DEFAULT_JPEG_QUALITY;
use crate::core::{ConfigProvider, ProductEntry, SourceVariant};
use crate::utils::error::{RecolorError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: Option<JobInfo>,
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
    #[serde(default)]
    pub entries: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// 額外的樣板圖，輸出檔名加上 suffix
    #[serde(default)]
    pub variants: Vec<SourceVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub quality: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            RecolorError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecolorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRODUCT_DIR})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecolorError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 命令列參數優先於設定檔；--entry 會附加在設定檔的 entries 之後
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(source) = &cli.source {
            tracing::info!("🔧 Source overridden to: {}", source.display());
            self.source.path = source.clone();
        }
        if let Some(dir) = &cli.output_dir {
            tracing::info!("🔧 Output directory overridden to: {}", dir.display());
            self.output.dir = dir.clone();
        }
        if let Some(quality) = cli.quality {
            tracing::info!("🔧 Quality overridden to: {}", quality);
            self.output.quality = Some(quality);
        }
        self.entries.extend(cli.entries.iter().cloned());
    }

    pub fn job_name(&self) -> &str {
        self.job.as_ref().map(|j| j.name.as_str()).unwrap_or("unnamed")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn sources(&self) -> Vec<SourceVariant> {
        std::iter::once(SourceVariant::new(self.source.path.clone()))
            .chain(self.source.variants.iter().cloned())
            .collect()
    }

    fn output_dir(&self) -> &Path {
        &self.output.dir
    }

    fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    fn quality(&self) -> u8 {
        self.output.quality.unwrap_or(DEFAULT_JPEG_QUALITY)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::config::validate_job(self)
    }
}
