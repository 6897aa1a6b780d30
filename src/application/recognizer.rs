// src/application/recognizer.rs
use crate::application::BackendGateway;
use crate::domain::DomainError;
use std::path::Path;

pub struct Recognizer<G: BackendGateway> {
    gateway: G,
}

impl<G: BackendGateway> Recognizer<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Upload a handwriting photo and return the recognized text.
    pub async fn recognize(&self, image_file: &Path) -> Result<String, DomainError> {
        self.gateway.recognize_handwriting(image_file).await
    }
}
