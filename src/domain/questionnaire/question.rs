//! Questions and the question bank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Axis, Choice};
use crate::domain::foundation::ValidationError;

/// Identifies one question: its axis and 1-based position within that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionKey {
    pub axis: Axis,
    pub index: u8,
}

impl QuestionKey {
    pub fn new(axis: Axis, index: u8) -> Self {
        Self { axis, index }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.axis, self.index)
    }
}

/// A single prompt. Reverse-scored questions have their scale value negated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    #[serde(default)]
    pub reverse: bool,
}

impl Question {
    pub fn new(prompt: impl Into<String>, reverse: bool) -> Self {
        Self {
            prompt: prompt.into(),
            reverse,
        }
    }

    /// Contribution of `choice` to this question's axis total.
    pub fn signed_value(&self, choice: Choice) -> i32 {
        let value = choice.value() as i32;
        if self.reverse {
            -value
        } else {
            value
        }
    }
}

const BUILTIN: [(Axis, [(&str, bool); 3]); 4] = [
    (
        Axis::EI,
        [
            ("여럿이 함께 공부하면 에너지가 나고 더 잘 된다.", false),
            ("수업 발표/토론이 있을 때 부담보다는 기대가 된다.", false),
            ("혼자 공부하는 시간이 가장 편하고 집중이 잘 된다.", true),
        ],
    ),
    (
        Axis::SN,
        [
            ("개념보다 먼저 예시/사례를 봐야 이해가 된다.", false),
            ("세부 사실·절차를 하나씩 따라가며 배우는 편이다.", false),
            ("아이디어를 확장하고 상상하는 활동이 재미있다.", true),
        ],
    ),
    (
        Axis::TF,
        [
            ("정답·근거가 분명한 문제를 더 선호한다.", false),
            ("과제에서 사람들의 감정이나 관계도 중요하다고 느낀다.", true),
            ("의사결정 시 데이터·논리를 가장 우선한다.", false),
        ],
    ),
    (
        Axis::JP,
        [
            ("플래너로 일정을 정리하고 계획대로 진행한다.", false),
            ("〝마감 직전 몰입〞이 오히려 효율적일 때가 많다.", true),
            ("계획이 바뀌어도 즉석에서 유연하게 대응한다.", true),
        ],
    ),
];

/// Ordered questions for every axis.
///
/// Every axis has at least one question and every prompt is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    axes: BTreeMap<Axis, Vec<Question>>,
}

impl QuestionBank {
    /// Builds a bank, checking that all four axes are covered.
    pub fn new(axes: BTreeMap<Axis, Vec<Question>>) -> Result<Self, ValidationError> {
        for axis in Axis::ALL {
            let questions = axes
                .get(&axis)
                .filter(|qs| !qs.is_empty())
                .ok_or_else(|| ValidationError::empty_field(format!("questions.{}", axis)))?;

            if questions.len() > u8::MAX as usize {
                return Err(ValidationError::out_of_range(
                    format!("questions.{}", axis),
                    1,
                    u8::MAX as i32,
                    questions.len() as i32,
                ));
            }

            for (i, q) in questions.iter().enumerate() {
                if q.prompt.trim().is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "questions.{}[{}].prompt",
                        axis,
                        i + 1
                    )));
                }
            }
        }

        Ok(Self { axes })
    }

    /// The twelve-question bank shipped with the application.
    pub fn builtin() -> Self {
        let axes = BUILTIN
            .iter()
            .map(|(axis, items)| {
                let questions = items
                    .iter()
                    .map(|(prompt, reverse)| Question::new(*prompt, *reverse))
                    .collect();
                (*axis, questions)
            })
            .collect();
        Self { axes }
    }

    /// Parses a bank from YAML keyed by axis code.
    ///
    /// ```yaml
    /// EI:
    ///   - prompt: "I study best in groups."
    ///   - prompt: "I prefer studying alone."
    ///     reverse: true
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let axes: BTreeMap<Axis, Vec<Question>> = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("questions", e.to_string()))?;
        Self::new(axes)
    }

    /// Questions for one axis, in order.
    pub fn questions_for(&self, axis: Axis) -> &[Question] {
        self.axes.get(&axis).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, key: QuestionKey) -> Option<&Question> {
        let position = (key.index as usize).checked_sub(1)?;
        self.questions_for(key.axis).get(position)
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.get(key).is_some()
    }

    /// Total number of questions across all axes.
    pub fn len(&self) -> usize {
        self.axes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates every question in presentation order with its key.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &Question)> + '_ {
        self.axes.iter().flat_map(|(axis, questions)| {
            questions
                .iter()
                .enumerate()
                .map(move |(i, q)| (QuestionKey::new(*axis, (i + 1) as u8), q))
        })
    }

    /// Validates that `key` names a question in this bank.
    pub fn check_key(&self, key: QuestionKey) -> Result<(), ValidationError> {
        if self.contains(key) {
            return Ok(());
        }
        Err(ValidationError::out_of_range(
            "index",
            1,
            self.questions_for(key.axis).len() as i32,
            key.index as i32,
        ))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_three_questions_per_axis() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 12);
        for axis in Axis::ALL {
            assert_eq!(bank.questions_for(axis).len(), 3);
        }
    }

    #[test]
    fn builtin_reverse_flags_match_prompts() {
        let bank = QuestionBank::builtin();
        let reversed: Vec<String> = bank
            .iter()
            .filter(|(_, q)| q.reverse)
            .map(|(key, _)| key.to_string())
            .collect();
        assert_eq!(reversed, vec!["EI-3", "SN-3", "TF-2", "JP-2", "JP-3"]);
    }

    #[test]
    fn iter_runs_in_axis_order() {
        let bank = QuestionBank::builtin();
        let first = bank.iter().next().unwrap().0;
        let last = bank.iter().last().unwrap().0;
        assert_eq!(first, QuestionKey::new(Axis::EI, 1));
        assert_eq!(last, QuestionKey::new(Axis::JP, 3));
    }

    #[test]
    fn get_is_one_based() {
        let bank = QuestionBank::builtin();
        assert!(bank.get(QuestionKey::new(Axis::TF, 0)).is_none());
        assert!(bank.get(QuestionKey::new(Axis::TF, 1)).is_some());
        assert!(bank.get(QuestionKey::new(Axis::TF, 4)).is_none());
    }

    #[test]
    fn check_key_rejects_unknown_index() {
        let bank = QuestionBank::builtin();
        assert!(bank.check_key(QuestionKey::new(Axis::SN, 3)).is_ok());
        let err = bank.check_key(QuestionKey::new(Axis::SN, 9)).unwrap_err();
        assert_eq!(err.field(), "index");
    }

    #[test]
    fn signed_value_negates_reverse_questions() {
        let forward = Question::new("p", false);
        let reverse = Question::new("p", true);
        assert_eq!(forward.signed_value(Choice::StronglyAgree), 2);
        assert_eq!(reverse.signed_value(Choice::StronglyAgree), -2);
        assert_eq!(reverse.signed_value(Choice::Disagree), 1);
    }

    #[test]
    fn from_yaml_parses_custom_bank() {
        let yaml = r#"
EI:
  - prompt: "Group study energizes me."
SN:
  - prompt: "I need examples first."
TF:
  - prompt: "I prefer clear answers."
JP:
  - prompt: "Deadlines focus me."
    reverse: true
"#;
        let bank = QuestionBank::from_yaml_str(yaml).unwrap();
        assert_eq!(bank.len(), 4);
        assert!(bank.get(QuestionKey::new(Axis::JP, 1)).unwrap().reverse);
        assert!(!bank.get(QuestionKey::new(Axis::EI, 1)).unwrap().reverse);
    }

    #[test]
    fn from_yaml_rejects_missing_axis() {
        let yaml = r#"
EI:
  - prompt: "a"
SN:
  - prompt: "b"
TF:
  - prompt: "c"
"#;
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.field(), "questions.JP");
    }

    #[test]
    fn from_yaml_rejects_blank_prompt() {
        let yaml = r#"
EI: [{prompt: "a"}]
SN: [{prompt: "   "}]
TF: [{prompt: "c"}]
JP: [{prompt: "d"}]
"#;
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.field(), "questions.SN[1].prompt");
    }

    #[test]
    fn from_yaml_rejects_malformed_document() {
        assert!(QuestionBank::from_yaml_str("EI: 12").is_err());
    }
}
