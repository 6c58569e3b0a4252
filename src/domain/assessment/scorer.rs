//! Pure scoring over a complete answer sheet.

use super::{AssessmentResult, AxisTotals, CompleteAnswers};
use crate::domain::foundation::Timestamp;

/// Sums each axis, negating reverse-scored questions.
pub fn tally(answers: &CompleteAnswers<'_>) -> AxisTotals {
    let mut totals = AxisTotals::default();
    for (key, question) in answers.bank().iter() {
        totals.add(key.axis, question.signed_value(answers.choice(key)));
    }
    totals
}

/// Scores the sheet, stamping the result with the current time.
pub fn score(answers: &CompleteAnswers<'_>) -> AssessmentResult {
    score_at(answers, Timestamp::now())
}

pub fn score_at(answers: &CompleteAnswers<'_>, at: Timestamp) -> AssessmentResult {
    AssessmentResult::new(tally(answers), at)
}
