// src/application/note_recorder.rs
use crate::application::BackendGateway;
use crate::domain::{DomainError, Note, NoteDraft};

pub struct NoteRecorder<G: BackendGateway> {
    gateway: G,
}

impl<G: BackendGateway> NoteRecorder<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Save a note and return the stored record. The exam-mode flag is
    /// immutable after creation; this client never updates or deletes
    /// notes.
    pub async fn save(&self, draft: NoteDraft) -> Result<Note, DomainError> {
        self.gateway.create_note(&draft).await
    }

    /// Save a note captured during an exam: same call with the exam
    /// flag forced on.
    pub async fn save_exam_note(
        &self,
        title: String,
        content: String,
    ) -> Result<Note, DomainError> {
        self.save(NoteDraft {
            title,
            content,
            is_exam_mode: true,
        })
        .await
    }
}
