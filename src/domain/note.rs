// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_exam_mode: bool,
}

/// Fields the client supplies when creating a note. The id and creation
/// timestamp are assigned server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub is_exam_mode: bool,
}
