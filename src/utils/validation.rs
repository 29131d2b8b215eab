use crate::utils::error::{RecolorError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Source formats the `image` crate is built with.
pub const SUPPORTED_SOURCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 檔名片段不可跳出輸出目錄
pub fn validate_filename_component(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['/', '\\', '\0']) {
        return Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not contain path separators or null bytes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_identifier(field_name: &str, identifier: &str) -> Result<()> {
    validate_non_empty_string(field_name, identifier)?;
    validate_filename_component(field_name, identifier)?;

    if identifier == "." || identifier == ".." {
        return Err(RecolorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: identifier.to_string(),
            reason: "Identifier cannot be a relative directory name".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(RecolorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value must be unique".to_string(),
            });
        }
    }
    Ok(())
}

/// Returns identifiers that appear more than once, in first-seen order.
pub fn duplicate_values<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        if !seen.insert(value) && reported.insert(value) {
            duplicates.push(value);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source.path", Path::new("biometal.png")).is_ok());
        assert!(validate_path("source.path", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = &SUPPORTED_SOURCE_EXTENSIONS;
        assert!(validate_file_extension("source.path", Path::new("a.png"), allowed).is_ok());
        assert!(validate_file_extension("source.path", Path::new("a.JPG"), allowed).is_ok());
        assert!(validate_file_extension("source.path", Path::new("a.tiff"), allowed).is_err());
        assert!(validate_file_extension("source.path", Path::new("noext"), allowed).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.quality", 90u8, 1, 100).is_ok());
        assert!(validate_range("output.quality", 0u8, 1, 100).is_err());
        assert!(validate_range("output.quality", 101u8, 1, 100).is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("entries.identifier", "d13be0da-b7c1-4a50-b720-d27c72da6bb8").is_ok());
        assert!(validate_identifier("entries.identifier", "").is_err());
        assert!(validate_identifier("entries.identifier", "  ").is_err());
        assert!(validate_identifier("entries.identifier", "../escape").is_err());
        assert!(validate_identifier("entries.identifier", "a\\b").is_err());
        assert!(validate_identifier("entries.identifier", "..").is_err());
    }

    #[test]
    fn test_duplicate_values() {
        let values = ["a", "b", "a", "c", "a", "b"];
        assert_eq!(duplicate_values(values), vec!["a", "b"]);
        assert!(validate_unique("source.variants.suffix", ["", "-3"]).is_ok());
        assert!(validate_unique("source.variants.suffix", ["-3", "-3"]).is_err());
    }
}
