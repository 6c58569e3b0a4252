//! Text and JSON renderings of an assessment result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AssessmentResult;

/// Heading of the plain-text export.
pub const TEXT_HEADING: &str = "[8비트 학습 성향 진단 결과]";

/// Base file name used when an export is saved.
pub const EXPORT_FILE_STEM: &str = "learning_mbti_result";

/// Errors raised while rendering or parsing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Export formats supported for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Human-readable plain-text block.
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }

    /// File name a saved export gets, e.g. `learning_mbti_result.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl AssessmentResult {
    /// Plain-text block with code, totals, and timestamp.
    pub fn to_text(&self) -> String {
        format!(
            "{}\nMBTI: {}\n점수 합계: {}\n측정시각: {}",
            TEXT_HEADING,
            self.code,
            self.totals,
            self.scored_at.to_iso8601()
        )
    }

    /// Pretty-printed JSON with `mbti`, `raw`, and `at` fields.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Text => Ok(self.to_text()),
            ExportFormat::Json => self.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AxisTotals;
    use crate::domain::foundation::Timestamp;
    use chrono::{DateTime, Utc};

    fn sample() -> AssessmentResult {
        let at = DateTime::parse_from_rfc3339("2025-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        AssessmentResult::new(
            AxisTotals { ei: 2, sn: -1, tf: 0, jp: -4 },
            Timestamp::from_datetime(at),
        )
    }

    #[test]
    fn text_export_lists_code_totals_and_time() {
        let text = sample().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], TEXT_HEADING);
        assert_eq!(lines[1], "MBTI: ENTP");
        assert_eq!(lines[2], "점수 합계: EI=+2, SN=-1, TF=+0, JP=-4");
        assert_eq!(lines[3], "측정시각: 2025-05-01T12:00:00.000000+00:00");
    }

    #[test]
    fn json_export_has_three_fields() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mbti"], "ENTP");
        assert_eq!(value["raw"]["JP"], -4);
        assert!(value["at"].as_str().unwrap().starts_with("2025-05-01T12:00:00"));
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn json_and_text_exports_share_the_timestamp() {
        let result = sample();
        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        let at = value["at"].as_str().unwrap();
        assert_eq!(at, "2025-05-01T12:00:00.000000+00:00");
        assert!(result.to_text().lines().any(|line| line == format!("측정시각: {}", at)));
    }

    #[test]
    fn json_round_trip_preserves_code_and_totals() {
        let original = sample();
        let parsed = AssessmentResult::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(parsed.code, original.code);
        assert_eq!(parsed.totals, original.totals);
        assert_eq!(parsed.scored_at, original.scored_at);
    }

    #[test]
    fn render_dispatches_on_format() {
        let result = sample();
        assert_eq!(result.render(ExportFormat::Text).unwrap(), result.to_text());
        assert!(result.render(ExportFormat::Json).unwrap().starts_with('{'));
    }

    #[test]
    fn format_parses_aliases() {
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn format_file_names() {
        assert_eq!(ExportFormat::Text.file_name(), "learning_mbti_result.txt");
        assert_eq!(ExportFormat::Json.file_name(), "learning_mbti_result.json");
        assert_eq!(ExportFormat::Json.content_type(), "application/json; charset=utf-8");
    }
}
