// src/util/testing.rs

use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{BackendGateway, CredentialStore};
use crate::domain::{Credentials, DomainError, Note, NoteDraft, Profile};

enum LoginBehavior {
    Accept(Credentials),
    Reject,
}

/// Shared mock backend for testing use cases that depend on
/// `BackendGateway`.
///
/// The builder configures per-operation behavior; anything left
/// unconfigured fails with a generic request error, which doubles as a
/// "this call should not have happened" guard.
///
/// # Examples
///
/// ```
/// use starlus::util::testing::{test_note, MockBackend};
///
/// let mock = MockBackend::builder()
///     .with_note(test_note(1, "Trees", false))
///     .with_evaluation("9*3", "27")
///     .build();
/// ```
pub struct MockBackend {
    login: LoginBehavior,
    profiles: Vec<Profile>,
    notes: Mutex<Vec<Note>>,
    evaluations: HashMap<String, String>,
    transcription: Option<String>,
    recognition: Option<String>,
    expired: bool,
}

impl MockBackend {
    pub fn builder() -> MockBackendBuilder {
        MockBackendBuilder::new()
    }

    fn check_session(&self) -> Result<(), DomainError> {
        if self.expired {
            Err(DomainError::SessionExpired)
        } else {
            Ok(())
        }
    }
}

impl BackendGateway for MockBackend {
    async fn obtain_tokens(
        &self,
        _username: &str,
        _password: &str,
    ) -> Result<Credentials, DomainError> {
        match &self.login {
            LoginBehavior::Accept(credentials) => Ok(credentials.clone()),
            LoginBehavior::Reject => {
                Err(DomainError::RequestFailed("backend returned 401".to_string()))
            }
        }
    }

    async fn register_user(
        &self,
        _username: &str,
        _email: &str,
        _password: &str,
    ) -> Result<(), DomainError> {
        Ok(())
    }

    async fn fetch_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        self.check_session()?;
        Ok(self.profiles.clone())
    }

    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        self.check_session()?;
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.check_session()?;
        let mut notes = self.notes.lock().unwrap();
        let note = Note {
            id: notes.len() as i64 + 1,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: Utc::now(),
            is_exam_mode: draft.is_exam_mode,
        };
        notes.push(note.clone());
        Ok(note)
    }

    async fn evaluate_expression(&self, expression: &str) -> Result<String, DomainError> {
        self.check_session()?;
        self.evaluations.get(expression).cloned().ok_or_else(|| {
            DomainError::RequestFailed(format!("no evaluation configured for {expression}"))
        })
    }

    async fn transcribe_audio(&self, _audio_file: &Path) -> Result<String, DomainError> {
        self.check_session()?;
        self.transcription
            .clone()
            .ok_or_else(|| DomainError::RequestFailed("no transcription configured".to_string()))
    }

    async fn recognize_handwriting(&self, _image_file: &Path) -> Result<String, DomainError> {
        self.check_session()?;
        self.recognition
            .clone()
            .ok_or_else(|| DomainError::RequestFailed("no recognition configured".to_string()))
    }
}

/// Builder for `MockBackend`.
pub struct MockBackendBuilder {
    login: LoginBehavior,
    profiles: Vec<Profile>,
    notes: Vec<Note>,
    evaluations: HashMap<String, String>,
    transcription: Option<String>,
    recognition: Option<String>,
    expired: bool,
}

impl MockBackendBuilder {
    pub fn new() -> Self {
        Self {
            login: LoginBehavior::Reject,
            profiles: vec![],
            notes: vec![],
            evaluations: HashMap::new(),
            transcription: None,
            recognition: None,
            expired: false,
        }
    }

    /// Accept any login with this token pair.
    pub fn with_login(mut self, credentials: Credentials) -> Self {
        self.login = LoginBehavior::Accept(credentials);
        self
    }

    /// Add a profile to the list response.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Seed a note into the backend's list.
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure the evaluation result for a specific expression.
    pub fn with_evaluation(mut self, expression: &str, result: &str) -> Self {
        self.evaluations
            .insert(expression.to_string(), result.to_string());
        self
    }

    pub fn with_transcription(mut self, text: &str) -> Self {
        self.transcription = Some(text.to_string());
        self
    }

    pub fn with_recognition(mut self, text: &str) -> Self {
        self.recognition = Some(text.to_string());
        self
    }

    /// Make every authenticated operation fail as an expired session.
    pub fn with_expired_session(mut self) -> Self {
        self.expired = true;
        self
    }

    pub fn build(self) -> MockBackend {
        MockBackend {
            login: self.login,
            profiles: self.profiles,
            notes: Mutex::new(self.notes),
            evaluations: self.evaluations,
            transcription: self.transcription,
            recognition: self.recognition,
            expired: self.expired,
        }
    }
}

impl Default for MockBackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory credential store; clones share the same slot so a session
/// manager and a backend observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    slot: Arc<Mutex<Option<Credentials>>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn store(&self, credentials: &Credentials) -> Result<(), DomainError> {
        *self.slot.lock().unwrap() = Some(credentials.clone());
        Ok(())
    }

    fn read(&self) -> Result<Option<Credentials>, DomainError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<(), DomainError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

/// Note fixture with a fixed timestamp.
pub fn test_note(id: i64, title: &str, is_exam_mode: bool) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: format!("{title} content"),
        created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
        is_exam_mode,
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "wiremock", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
