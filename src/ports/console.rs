// src/ports/console.rs
use crate::domain::{DomainError, Note, Profile};
use crate::util::text::{first_line, truncate};

/// Characters of note content shown in list previews.
const PREVIEW_CHARS: usize = 72;

/// Plain-text presentation of every command outcome.
///
/// Failures all pass through `report_failure`, which renders one
/// uniform `error (<kind>): <message>` line; individual commands do
/// not invent their own error output.
#[derive(Debug)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_profile(&self, profile: &Profile) -> String {
        let mut lines = vec![format!(
            "{} <{}>",
            profile.user.username, profile.user.email
        )];
        if !profile.bio.is_empty() {
            lines.push(profile.bio.clone());
        }
        if let Some(picture) = &profile.profile_picture {
            lines.push(format!("picture: {picture}"));
        }
        lines.join("\n")
    }

    pub fn render_notes(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes found.".to_string();
        }
        notes
            .iter()
            .map(|note| self.render_note_line(note))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_note_line(&self, note: &Note) -> String {
        let tag = if note.is_exam_mode { " [exam]" } else { "" };
        let preview = truncate(&first_line(&note.content), PREVIEW_CHARS);
        format!(
            "[{}] {} ({}){}\n    {}",
            note.id,
            note.title,
            note.created_at.format("%Y-%m-%d"),
            tag,
            preview
        )
    }

    pub fn render_saved_note(&self, note: &Note) -> String {
        let tag = if note.is_exam_mode { " [exam]" } else { "" };
        format!("Saved note [{}] {}{}", note.id, note.title, tag)
    }

    pub fn render_transcription(&self, text: &str) -> String {
        format!("Transcribed text:\n{text}")
    }

    pub fn render_recognition(&self, text: &str) -> String {
        format!("Recognized text:\n{text}")
    }

    /// Single failure line: kind plus message.
    pub fn failure_line(&self, error: &DomainError) -> String {
        format!("error ({}): {}", failure_kind(error), error)
    }

    pub fn report_failure(&self, error: &DomainError) {
        eprintln!("{}", self.failure_line(error));
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_kind(error: &DomainError) -> &'static str {
    match error {
        DomainError::InvalidCredentials | DomainError::NotAuthenticated => "auth",
        DomainError::SessionExpired => "session",
        DomainError::ProfileNotFound | DomainError::RequestFailed(_) => "backend",
        DomainError::Storage(_) => "storage",
    }
}
