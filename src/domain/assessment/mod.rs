//! Assessment module - answering, scoring, and exporting.
//!
//! # Domain Invariants
//!
//! 1. An answer key is unique; re-selecting a choice overwrites it
//! 2. Scoring only runs on a sheet that covers every question in the bank
//! 3. A code letter is the positive letter when the axis total is >= 0
//! 4. Letters are emitted in axis order EI, SN, TF, JP

mod answers;
mod export;
mod result;
pub mod scorer;
mod session;

pub use answers::{AnswerSheet, CompleteAnswers, IncompleteAnswers, INCOMPLETE_WARNING};
pub use export::{ExportError, ExportFormat, EXPORT_FILE_STEM, TEXT_HEADING};
pub use result::{AssessmentResult, AxisTotals, TypeCode};
pub use session::{AssessmentSession, Progress, ScoreOutcome};
