use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Invalid color format '{value}': {reason}")]
    InvalidColorFormat { value: String, reason: String },

    #[error("Failed to load image '{path}': {source}")]
    ImageLoadError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode JPEG for '{identifier}': {source}")]
    EncodeError {
        identifier: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write output '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Image,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl RecolorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecolorError::InvalidColorFormat { .. } => ErrorCategory::Input,
            RecolorError::ImageLoadError { .. } | RecolorError::EncodeError { .. } => {
                ErrorCategory::Image
            }
            RecolorError::OutputWriteError { .. } => ErrorCategory::Output,
            RecolorError::IoError(_) => ErrorCategory::System,
            RecolorError::ConfigValidationError { .. }
            | RecolorError::InvalidConfigValueError { .. }
            | RecolorError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Image | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Output | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 退出碼，依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecolorError::InvalidColorFormat { .. } => {
                "Use a hex color with a leading '#', e.g. #ffffff or #fff"
            }
            RecolorError::ImageLoadError { .. } => {
                "Check that the source image exists, is readable and is a PNG, JPEG, GIF or WebP file"
            }
            RecolorError::EncodeError { .. } => "Try a different source image or JPEG quality",
            RecolorError::OutputWriteError { .. } => {
                "Check that the output directory exists or can be created and is writable"
            }
            RecolorError::IoError(_) => "Check file permissions and available disk space",
            RecolorError::ConfigValidationError { .. } => {
                "Check the configuration file syntax against the documented TOML layout"
            }
            RecolorError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and run again"
            }
            RecolorError::MissingConfigError { .. } => {
                "Provide the missing value via the TOML config or a command line flag"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecolorError::InvalidColorFormat { value, .. } => {
                format!("'{}' is not a valid background color", value)
            }
            RecolorError::ImageLoadError { path, .. } => {
                format!("Could not load source image '{}'", path)
            }
            RecolorError::EncodeError { identifier, .. } => {
                format!("Could not encode the JPEG for '{}'", identifier)
            }
            RecolorError::OutputWriteError { path, .. } => {
                format!("Could not write output file '{}'", path)
            }
            RecolorError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecolorError>;
