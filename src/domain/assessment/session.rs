//! AssessmentSession aggregate - one user's pass through the questionnaire.

use serde::Serialize;

use super::{scorer, AnswerSheet, AssessmentResult, IncompleteAnswers};
use crate::domain::foundation::{SessionId, Timestamp, ValidationError};
use crate::domain::questionnaire::{Choice, QuestionBank, QuestionKey};

/// How far a session has progressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub missing: Vec<QuestionKey>,
    pub scored: bool,
}

impl Progress {
    /// Fraction answered, in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of asking a session to score itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreOutcome {
    Scored(AssessmentResult),
    Incomplete(IncompleteAnswers),
}

/// Answers and the latest result for one session.
///
/// # Invariants
///
/// - Only keys present in the bank are ever recorded
/// - `result` is cleared whenever the answers change
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: SessionId,
    answers: AnswerSheet,
    result: Option<AssessmentResult>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            answers: AnswerSheet::new(),
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Last computed result, if the answers have not changed since.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Records a choice, replacing any earlier answer for the same question.
    pub fn record_answer(
        &mut self,
        bank: &QuestionBank,
        key: QuestionKey,
        choice: Choice,
    ) -> Result<Option<Choice>, ValidationError> {
        bank.check_key(key)?;
        let previous = self.answers.record(key, choice);
        self.result = None;
        self.touch();
        Ok(previous)
    }

    /// Clears every answer and any result.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
        self.touch();
    }

    pub fn progress(&self, bank: &QuestionBank) -> Progress {
        let missing = self.answers.missing(bank);
        Progress {
            answered: bank.len() - missing.len(),
            total: bank.len(),
            missing,
            scored: self.result.is_some(),
        }
    }

    /// Scores the session, or reports which questions are still open.
    pub fn score(&mut self, bank: &QuestionBank) -> ScoreOutcome {
        let result = match self.answers.check_complete(bank) {
            Ok(complete) => scorer::score(&complete),
            Err(incomplete) => return ScoreOutcome::Incomplete(incomplete),
        };
        self.result = Some(result.clone());
        self.touch();
        ScoreOutcome::Scored(result)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}
