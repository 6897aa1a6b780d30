// src/application/mod.rs
pub mod authenticator;
pub mod calculator;
pub mod gateway;
pub mod note_browser;
pub mod note_recorder;
pub mod profile_viewer;
pub mod recognizer;
pub mod session;
pub mod transcriber;

pub use authenticator::Authenticator;
pub use calculator::CalculatorSession;
pub use gateway::BackendGateway;
pub use note_browser::NoteBrowser;
pub use note_recorder::NoteRecorder;
pub use profile_viewer::ProfileViewer;
pub use recognizer::Recognizer;
pub use session::{CredentialStore, SessionManager};
pub use transcriber::Transcriber;
