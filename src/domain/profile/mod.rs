//! Profile module - static learning profiles.
//!
//! Lookup is total: unknown codes resolve to a generic default profile.

mod catalog;

pub use catalog::{profile_for, LearningProfile, DEFAULT_PROFILE};
