//! GetQuestionnaire - Query handler for the question bank as shown to a user.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::questionnaire::{Axis, Choice, QuestionBank, QuestionKey};

/// One numbered question. Reverse scoring is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// Running label across the whole questionnaire, e.g. `"Q01"`.
    pub number: String,
    pub key: QuestionKey,
    pub prompt: String,
}

/// The questions of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisView {
    pub axis: Axis,
    pub label: String,
    pub questions: Vec<QuestionView>,
}

/// One option of the answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub value: i8,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireView {
    pub total: usize,
    pub choices: Vec<ChoiceView>,
    pub axes: Vec<AxisView>,
}

pub struct GetQuestionnaireHandler {
    bank: Arc<QuestionBank>,
}

impl GetQuestionnaireHandler {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn handle(&self) -> QuestionnaireView {
        let mut number = 0;
        let axes = Axis::ALL
            .iter()
            .map(|&axis| AxisView {
                axis,
                label: axis.pair_label(),
                questions: self
                    .bank
                    .questions_for(axis)
                    .iter()
                    .enumerate()
                    .map(|(i, q)| {
                        number += 1;
                        QuestionView {
                            number: format!("Q{:02}", number),
                            key: QuestionKey::new(axis, (i + 1) as u8),
                            prompt: q.prompt.clone(),
                        }
                    })
                    .collect(),
            })
            .collect();

        QuestionnaireView {
            total: self.bank.len(),
            choices: Choice::ALL
                .iter()
                .map(|c| ChoiceView {
                    value: c.value(),
                    label: c.label(),
                })
                .collect(),
            axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_are_numbered_across_axes() {
        let view = GetQuestionnaireHandler::new(Arc::new(QuestionBank::builtin())).handle();

        assert_eq!(view.total, 12);
        assert_eq!(view.axes.len(), 4);

        let numbers: Vec<_> = view
            .axes
            .iter()
            .flat_map(|a| a.questions.iter().map(|q| q.number.as_str()))
            .collect();
        assert_eq!(numbers.first(), Some(&"Q01"));
        assert_eq!(numbers.last(), Some(&"Q12"));

        let sn = &view.axes[1];
        assert_eq!(sn.axis, Axis::SN);
        assert_eq!(sn.questions[0].number, "Q04");
        assert_eq!(sn.questions[0].key, QuestionKey::new(Axis::SN, 1));
    }

    #[test]
    fn test_choices_in_presentation_order() {
        let view = GetQuestionnaireHandler::new(Arc::new(QuestionBank::builtin())).handle();

        let values: Vec<i8> = view.choices.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![2, 1, 0, -1, -2]);
    }

    #[test]
    fn test_view_hides_reverse_flag() {
        let view = GetQuestionnaireHandler::new(Arc::new(QuestionBank::builtin())).handle();
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["axes"][0]["questions"][2].get("reverse").is_none());
    }
}
