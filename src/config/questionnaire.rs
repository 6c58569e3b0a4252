//! Question bank configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::{ConfigError, ValidationError};
use crate::domain::questionnaire::QuestionBank;

/// Where the question bank comes from.
///
/// Without `bank_path` the built-in twelve questions are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionnaireConfig {
    /// Optional YAML file replacing the built-in bank
    pub bank_path: Option<PathBuf>,
}

impl QuestionnaireConfig {
    /// Load the configured bank.
    ///
    /// # Errors
    ///
    /// - `BankUnreadable` if the file cannot be read
    /// - `BankInvalid` if the YAML does not describe a valid bank
    pub fn load_bank(&self) -> Result<QuestionBank, ConfigError> {
        let Some(path) = &self.bank_path else {
            return Ok(QuestionBank::builtin());
        };

        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::BankUnreadable {
            path: path.clone(),
            source,
        })?;

        QuestionBank::from_yaml_str(&yaml).map_err(|source| ConfigError::BankInvalid {
            path: path.clone(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.bank_path {
            Some(path) if !path.is_file() => Err(ValidationError::BankNotFound(path.clone())),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_PER_AXIS: &str = r#"
EI:
  - prompt: "Group study energizes me."
  - prompt: "I prefer to study alone."
    reverse: true
SN:
  - prompt: "Examples first."
  - prompt: "Big picture first."
    reverse: true
TF:
  - prompt: "Logic over feelings."
  - prompt: "Harmony matters."
    reverse: true
JP:
  - prompt: "I plan ahead."
  - prompt: "I improvise."
    reverse: true
"#;

    #[test]
    fn test_default_uses_builtin_bank() {
        let bank = QuestionnaireConfig::default().load_bank().unwrap();
        assert_eq!(bank.len(), 12);
    }

    #[test]
    fn test_load_bank_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TWO_PER_AXIS.as_bytes()).unwrap();

        let config = QuestionnaireConfig {
            bank_path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());

        let bank = config.load_bank().unwrap();
        assert_eq!(bank.len(), 8);
    }

    #[test]
    fn test_missing_file_fails_validation() {
        let config = QuestionnaireConfig {
            bank_path: Some(PathBuf::from("/nonexistent/bank.yaml")),
        };
        assert!(matches!(config.validate(), Err(ValidationError::BankNotFound(_))));
        assert!(matches!(
            config.load_bank(),
            Err(ConfigError::BankUnreadable { .. })
        ));
    }

    #[test]
    fn test_invalid_bank_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"EI:\n  - prompt: \"only one axis\"\n").unwrap();

        let config = QuestionnaireConfig {
            bank_path: Some(file.path().to_path_buf()),
        };
        assert!(matches!(config.load_bank(), Err(ConfigError::BankInvalid { .. })));
    }
}
