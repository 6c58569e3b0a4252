//! The four bipolar axes of the learning style code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four fixed MBTI-style dimensions.
///
/// Declaration order is the order letters appear in a code.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion / Introversion
    EI,
    /// Sensing / Intuition
    SN,
    /// Thinking / Feeling
    TF,
    /// Judging / Perceiving
    JP,
}

impl Axis {
    /// All axes in code order.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// Two-letter identifier, e.g. `"EI"`.
    pub fn code(&self) -> &'static str {
        match self {
            Axis::EI => "EI",
            Axis::SN => "SN",
            Axis::TF => "TF",
            Axis::JP => "JP",
        }
    }

    /// Letter emitted when the axis total is zero or above.
    pub fn positive_letter(&self) -> char {
        match self {
            Axis::EI => 'E',
            Axis::SN => 'S',
            Axis::TF => 'T',
            Axis::JP => 'J',
        }
    }

    /// Letter emitted when the axis total is below zero.
    pub fn negative_letter(&self) -> char {
        match self {
            Axis::EI => 'I',
            Axis::SN => 'N',
            Axis::TF => 'F',
            Axis::JP => 'P',
        }
    }

    /// Picks the letter for a signed total. Ties go to the positive letter.
    pub fn letter_for(&self, total: i32) -> char {
        if total >= 0 {
            self.positive_letter()
        } else {
            self.negative_letter()
        }
    }

    /// Returns true if `letter` is one of this axis' two letters.
    pub fn accepts(&self, letter: char) -> bool {
        letter == self.positive_letter() || letter == self.negative_letter()
    }

    /// Label used when showing totals, e.g. `"E/I"`.
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.positive_letter(), self.negative_letter())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Axis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EI" => Ok(Axis::EI),
            "SN" => Ok(Axis::SN),
            "TF" => Ok(Axis::TF),
            "JP" => Ok(Axis::JP),
            _ => Err(ValidationError::invalid_format(
                "axis",
                format!("expected one of EI, SN, TF, JP, got '{}'", s),
            )),
        }
    }
}
