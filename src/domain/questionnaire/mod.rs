//! Questionnaire module - axes, answer scale, and question bank.
//!
//! The bank is fixed for the lifetime of the process: either the built-in
//! twelve prompts or a YAML override loaded at startup.

mod axis;
mod choice;
mod question;

pub use axis::Axis;
pub use choice::{Choice, ChoiceInput};
pub use question::{Question, QuestionBank, QuestionKey};
