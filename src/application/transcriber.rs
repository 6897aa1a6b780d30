// src/application/transcriber.rs
use crate::application::BackendGateway;
use crate::domain::DomainError;
use std::path::Path;

pub struct Transcriber<G: BackendGateway> {
    gateway: G,
}

impl<G: BackendGateway> Transcriber<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Upload a recording and return the transcribed text.
    pub async fn transcribe(&self, audio_file: &Path) -> Result<String, DomainError> {
        self.gateway.transcribe_audio(audio_file).await
    }
}
