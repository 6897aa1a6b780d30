// src/application/note_browser.rs
use crate::application::BackendGateway;
use crate::domain::{DomainError, Note};

pub struct NoteBrowser<G: BackendGateway> {
    gateway: G,
}

impl<G: BackendGateway> NoteBrowser<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// List notes in server order, optionally narrowed to exam-mode
    /// notes. The exam flag is a display-only filter; the fetch itself
    /// is always the full list.
    pub async fn list_notes(&self, exam_only: bool) -> Result<Vec<Note>, DomainError> {
        let mut notes = self.gateway.list_notes().await?;
        if exam_only {
            notes.retain(|note| note.is_exam_mode);
        }
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{test_note, MockBackend};

    #[tokio::test]
    async fn given_no_filter_when_listing_notes_then_returns_all_in_server_order() {
        // Arrange
        let backend = MockBackend::builder()
            .with_note(test_note(1, "Trees", false))
            .with_note(test_note(2, "Graphs", true))
            .build();
        let browser = NoteBrowser::new(backend);

        // Act
        let notes = browser.list_notes(false).await.expect("List should succeed");

        // Assert
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[1].id, 2);
    }

    #[tokio::test]
    async fn given_exam_filter_when_listing_notes_then_returns_only_exam_notes() {
        // Arrange
        let backend = MockBackend::builder()
            .with_note(test_note(1, "Trees", false))
            .with_note(test_note(2, "Graphs", true))
            .with_note(test_note(3, "Sorting", true))
            .build();
        let browser = NoteBrowser::new(backend);

        // Act
        let notes = browser.list_notes(true).await.expect("List should succeed");

        // Assert
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|note| note.is_exam_mode));
        assert_eq!(notes[0].id, 2);
        assert_eq!(notes[1].id, 3);
    }
}
