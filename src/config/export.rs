//! Result export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where saved exports are written.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyExportDir);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("exports")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir() {
        let config = ExportConfig::default();
        assert_eq!(config.dir, PathBuf::from("exports"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_dir_rejected() {
        let config = ExportConfig { dir: PathBuf::new() };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyExportDir)));
    }
}
