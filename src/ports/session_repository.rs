//! Session repository port.
//!
//! Defines the contract for persisting and retrieving AssessmentSession
//! aggregates. Each session is independent; nothing is shared across them.

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Change applied to a stored session while the repository holds it exclusively.
pub type SessionMutation<'a> =
    Box<dyn FnOnce(&mut AssessmentSession) -> Result<(), DomainError> + Send + 'a>;

/// Boxes a closure as a [`SessionMutation`].
pub fn mutate_session<'a, F>(f: F) -> SessionMutation<'a>
where
    F: FnOnce(&mut AssessmentSession) -> Result<(), DomainError> + Send + 'a,
{
    Box::new(f)
}

/// Repository port for AssessmentSession persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Apply `mutation` to a stored session as one atomic step and return
    /// the session as stored afterwards.
    ///
    /// No other `modify` on the same session interleaves with this one. When
    /// `mutation` fails the stored session is left unchanged.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - whatever `mutation` returns
    async fn modify(
        &self,
        id: &SessionId,
        mutation: SessionMutation<'_>,
    ) -> Result<AssessmentSession, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
