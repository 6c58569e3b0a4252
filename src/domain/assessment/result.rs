//! Scoring output: the four-letter code, raw totals, and when it was taken.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::questionnaire::Axis;

/// Signed per-axis sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisTotals {
    #[serde(rename = "EI")]
    pub ei: i32,
    #[serde(rename = "SN")]
    pub sn: i32,
    #[serde(rename = "TF")]
    pub tf: i32,
    #[serde(rename = "JP")]
    pub jp: i32,
}

impl AxisTotals {
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::EI => self.ei,
            Axis::SN => self.sn,
            Axis::TF => self.tf,
            Axis::JP => self.jp,
        }
    }

    pub fn add(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::EI => self.ei += value,
            Axis::SN => self.sn += value,
            Axis::TF => self.tf += value,
            Axis::JP => self.jp += value,
        }
    }
}

impl fmt::Display for AxisTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:+}", axis, self.get(*axis))?;
        }
        Ok(())
    }
}

/// Four-letter code such as `ESTJ`, one letter per axis in axis order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode(String);

impl TypeCode {
    /// Derives the code from signed totals.
    pub fn from_totals(totals: &AxisTotals) -> Self {
        let code = Axis::ALL
            .iter()
            .map(|axis| axis.letter_for(totals.get(*axis)))
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every valid code, E/I varying slowest.
    pub fn all() -> Vec<TypeCode> {
        (0..16u8)
            .map(|bits| {
                let code = Axis::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, axis)| {
                        if bits & (0b1000 >> i) == 0 {
                            axis.positive_letter()
                        } else {
                            axis.negative_letter()
                        }
                    })
                    .collect();
                TypeCode(code)
            })
            .collect()
    }
}

impl FromStr for TypeCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != Axis::ALL.len() {
            return Err(ValidationError::invalid_format(
                "code",
                format!("expected 4 letters, got '{}'", s),
            ));
        }
        for (axis, letter) in Axis::ALL.iter().zip(&letters) {
            if !axis.accepts(*letter) {
                return Err(ValidationError::invalid_format(
                    "code",
                    format!("'{}' is not a valid {} letter", letter, axis),
                ));
            }
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for TypeCode {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of scoring a complete answer sheet.
///
/// Field names on the wire (`mbti`, `raw`, `at`) are the export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    #[serde(rename = "mbti")]
    pub code: TypeCode,
    #[serde(rename = "raw")]
    pub totals: AxisTotals,
    #[serde(rename = "at")]
    pub scored_at: Timestamp,
}

impl AssessmentResult {
    pub fn new(totals: AxisTotals, scored_at: Timestamp) -> Self {
        Self {
            code: TypeCode::from_totals(&totals),
            totals,
            scored_at,
        }
    }
}
