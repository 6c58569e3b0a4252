//! Likert choice value object (-2 to +2 scale).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Five-point agreement scale shown for every question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ChoiceInput")]
#[repr(i8)]
pub enum Choice {
    StronglyDisagree = -2,
    Disagree = -1,
    #[default]
    Neutral = 0,
    Agree = 1,
    StronglyAgree = 2,
}

impl Choice {
    /// All choices in the order they are presented.
    pub const ALL: [Choice; 5] = [
        Choice::StronglyAgree,
        Choice::Agree,
        Choice::Neutral,
        Choice::Disagree,
        Choice::StronglyDisagree,
    ];

    /// Creates a Choice from an integer, returning error if out of range.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            -2 => Ok(Choice::StronglyDisagree),
            -1 => Ok(Choice::Disagree),
            0 => Ok(Choice::Neutral),
            1 => Ok(Choice::Agree),
            2 => Ok(Choice::StronglyAgree),
            _ => Err(ValidationError::out_of_range("choice", -2, 2, value as i32)),
        }
    }

    /// Looks a choice up by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Returns the numeric scale value.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Choice::StronglyAgree => "매우 그렇다 (+2)",
            Choice::Agree => "그렇다 (+1)",
            Choice::Neutral => "보통 (0)",
            Choice::Disagree => "아니다 (-1)",
            Choice::StronglyDisagree => "전혀 아니다 (-2)",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Choice::StronglyAgree => "strongly_agree",
            Choice::Agree => "agree",
            Choice::Neutral => "neutral",
            Choice::Disagree => "disagree",
            Choice::StronglyDisagree => "strongly_disagree",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value() > 0 { "+" } else { "" };
        write!(f, "{}{}", sign, self.value())
    }
}

impl FromStr for Choice {
    type Err = ValidationError;

    /// Accepts a display label, a snake_case name, or a signed integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(choice) = Self::from_label(trimmed) {
            return Ok(choice);
        }
        if let Some(choice) = Self::ALL.into_iter().find(|c| c.name() == trimmed) {
            return Ok(choice);
        }
        match trimmed.trim_start_matches('+').parse::<i8>() {
            Ok(value) => Self::try_from_i8(value),
            Err(_) => Err(ValidationError::invalid_format(
                "choice",
                format!("unknown choice '{}'", s),
            )),
        }
    }
}

/// Wire form of a choice: either the scale value or any textual form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChoiceInput {
    Value(i8),
    Text(String),
}

impl TryFrom<ChoiceInput> for Choice {
    type Error = ValidationError;

    fn try_from(input: ChoiceInput) -> Result<Self, Self::Error> {
        match input {
            ChoiceInput::Value(v) => Choice::try_from_i8(v),
            ChoiceInput::Text(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_try_from_i8_accepts_valid_values() {
        assert_eq!(Choice::try_from_i8(-2).unwrap(), Choice::StronglyDisagree);
        assert_eq!(Choice::try_from_i8(0).unwrap(), Choice::Neutral);
        assert_eq!(Choice::try_from_i8(2).unwrap(), Choice::StronglyAgree);
    }

    #[test]
    fn choice_try_from_i8_rejects_invalid_values() {
        assert!(Choice::try_from_i8(-3).is_err());
        assert!(Choice::try_from_i8(3).is_err());
    }

    #[test]
    fn every_label_maps_to_exactly_one_value() {
        let values: Vec<i8> = Choice::ALL
            .iter()
            .map(|c| Choice::from_label(c.label()).unwrap().value())
            .collect();
        assert_eq!(values, vec![2, 1, 0, -1, -2]);
    }

    #[test]
    fn parses_labels_names_and_numbers() {
        assert_eq!("보통 (0)".parse::<Choice>().unwrap(), Choice::Neutral);
        assert_eq!("strongly_agree".parse::<Choice>().unwrap(), Choice::StronglyAgree);
        assert_eq!("+1".parse::<Choice>().unwrap(), Choice::Agree);
        assert_eq!("-2".parse::<Choice>().unwrap(), Choice::StronglyDisagree);
        assert!("maybe".parse::<Choice>().is_err());
        assert!("7".parse::<Choice>().is_err());
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Choice::default(), Choice::Neutral);
    }

    #[test]
    fn displays_with_sign() {
        assert_eq!(format!("{}", Choice::StronglyAgree), "+2");
        assert_eq!(format!("{}", Choice::Neutral), "0");
        assert_eq!(format!("{}", Choice::Disagree), "-1");
    }

    #[test]
    fn deserializes_from_number_or_text() {
        let from_number: Choice = serde_json::from_str("-1").unwrap();
        let from_label: Choice = serde_json::from_str("\"그렇다 (+1)\"").unwrap();
        let from_name: Choice = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(from_number, Choice::Disagree);
        assert_eq!(from_label, Choice::Agree);
        assert_eq!(from_name, Choice::Neutral);
        assert!(serde_json::from_str::<Choice>("5").is_err());
    }

    #[test]
    fn serializes_as_snake_case_name() {
        assert_eq!(
            serde_json::to_string(&Choice::StronglyDisagree).unwrap(),
            "\"strongly_disagree\""
        );
    }
}
