// src/application/gateway.rs
use crate::domain::{Credentials, DomainError, Note, NoteDraft, Profile};
use std::path::Path;

/// Port to the remote backend.
///
/// The infrastructure layer implements this over HTTP; tests use the
/// mock builder in `util::testing`. Every method maps to exactly one
/// backend request and surfaces failures as a `DomainError` without
/// retrying.
#[allow(async_fn_in_trait)]
pub trait BackendGateway {
    /// Exchange a username/password pair for a token pair.
    async fn obtain_tokens(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credentials, DomainError>;

    /// Create a new account. Unauthenticated.
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), DomainError>;

    /// Fetch the profile list; the first element belongs to the
    /// signed-in user.
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, DomainError>;

    /// Fetch all notes in server order.
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError>;

    /// Create a note and return it with the server-assigned id and
    /// timestamp.
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError>;

    /// Evaluate an arithmetic expression server-side.
    async fn evaluate_expression(&self, expression: &str) -> Result<String, DomainError>;

    /// Upload an audio recording and return the transcription.
    async fn transcribe_audio(&self, audio_file: &Path) -> Result<String, DomainError>;

    /// Upload a handwriting photo and return the recognized text.
    async fn recognize_handwriting(&self, image_file: &Path) -> Result<String, DomainError>;
}
