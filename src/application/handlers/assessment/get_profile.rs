//! GetProfile - Query handler for the learning profile of a type code.

use crate::domain::profile::{profile_for, LearningProfile};

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub code: String,
}

/// Stateless; the profile table is static.
#[derive(Debug, Default)]
pub struct GetProfileHandler;

impl GetProfileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Exact, case-sensitive lookup. Unknown codes get the default profile.
    pub fn handle(&self, query: GetProfileQuery) -> &'static LearningProfile {
        let profile = profile_for(&query.code);
        if profile.is_default() {
            tracing::debug!(code = %query.code, "No profile for code, using default");
        }
        profile
    }
}
