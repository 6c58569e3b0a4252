//! The per-session answer store.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::questionnaire::{Choice, QuestionBank, QuestionKey};

/// Warning text shown when scoring is attempted too early.
pub const INCOMPLETE_WARNING: &str = "모든 문항에 응답해주세요.";

/// Selected choices keyed by question. Re-selecting overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: HashMap<QuestionKey, Choice>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `choice` for `key`, returning the choice it replaced.
    pub fn record(&mut self, key: QuestionKey, choice: Choice) -> Option<Choice> {
        self.answers.insert(key, choice)
    }

    pub fn get(&self, key: QuestionKey) -> Option<Choice> {
        self.answers.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Bank questions that still have no answer, in presentation order.
    pub fn missing(&self, bank: &QuestionBank) -> Vec<QuestionKey> {
        bank.iter()
            .map(|(key, _)| key)
            .filter(|key| !self.answers.contains_key(key))
            .collect()
    }

    /// Number of bank questions that have an answer.
    pub fn answered(&self, bank: &QuestionBank) -> usize {
        bank.iter()
            .filter(|(key, _)| self.answers.contains_key(key))
            .count()
    }

    /// Proves every question in `bank` is answered.
    pub fn check_complete<'a>(
        &'a self,
        bank: &'a QuestionBank,
    ) -> Result<CompleteAnswers<'a>, IncompleteAnswers> {
        let missing = self.missing(bank);
        if missing.is_empty() {
            Ok(CompleteAnswers {
                bank,
                answers: self,
            })
        } else {
            Err(IncompleteAnswers {
                answered: bank.len() - missing.len(),
                total: bank.len(),
                missing,
            })
        }
    }
}

/// An answer sheet known to cover every question of a bank.
///
/// Only obtainable through [`AnswerSheet::check_complete`].
#[derive(Debug, Clone, Copy)]
pub struct CompleteAnswers<'a> {
    bank: &'a QuestionBank,
    answers: &'a AnswerSheet,
}

impl<'a> CompleteAnswers<'a> {
    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    /// Choice for a key that is guaranteed to be in the bank.
    pub(crate) fn choice(&self, key: QuestionKey) -> Choice {
        self.answers.get(key).unwrap_or_default()
    }
}

/// Scoring was requested before every question had an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{answered}/{total} answered: {}", INCOMPLETE_WARNING)]
pub struct IncompleteAnswers {
    pub answered: usize,
    pub total: usize,
    pub missing: Vec<QuestionKey>,
}

impl IncompleteAnswers {
    pub fn warning(&self) -> &'static str {
        INCOMPLETE_WARNING
    }
}
