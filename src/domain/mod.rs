//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `questionnaire` - Axes, the answer scale, and the question bank
//! - `assessment` - Answer sheets, scoring, results, and exports
//! - `profile` - Static learning profiles keyed by type code

pub mod assessment;
pub mod foundation;
pub mod profile;
pub mod questionnaire;
