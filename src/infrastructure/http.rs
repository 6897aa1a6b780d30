// src/infrastructure/http.rs
use crate::application::{BackendGateway, CredentialStore};
use crate::constants::{HANDWRITING_FILE_FIELD, SPEECH_FILE_FIELD};
use crate::domain::{Credentials, DomainError, Note, NoteDraft, Profile};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use tracing::{debug, instrument};

const TOKEN_ENDPOINT: &str = "token/";
const USERS_ENDPOINT: &str = "users/";
const PROFILES_ENDPOINT: &str = "profiles/";
const NOTES_ENDPOINT: &str = "notes/";
const CALCULATIONS_ENDPOINT: &str = "calculations/";
const SPEECH_ENDPOINT: &str = "speech/";
const HANDWRITTEN_ENDPOINT: &str = "handwritten/";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access: String,
    refresh: String,
}

#[derive(Debug, Deserialize)]
struct CalculationResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    transcribed_text: String,
}

#[derive(Debug, Deserialize)]
struct HandwrittenResponse {
    recognized_text: String,
}

/// HTTP adapter for the backend API.
///
/// Authenticated requests read the access token from the credential
/// store at request time and attach it as a bearer credential. A
/// missing token fails before anything goes on the wire; a 401/403
/// response maps to `SessionExpired`; every other failure collapses
/// into the single generic `RequestFailed` kind. Nothing is retried.
pub struct HttpBackend<S: CredentialStore> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: CredentialStore> HttpBackend<S> {
    pub fn new(base_url: &str, store: S) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn access_token(&self) -> Result<String, DomainError> {
        self.store
            .read()?
            .map(|credentials| credentials.access)
            .ok_or(DomainError::NotAuthenticated)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DomainError::SessionExpired),
            status => {
                debug!(%status, "Backend rejected request");
                Err(DomainError::RequestFailed(format!(
                    "backend returned {status}"
                )))
            }
        }
    }

    async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, DomainError> {
        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("invalid response body: {e}")))
    }

    async fn authed_get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, DomainError> {
        let token = self.access_token()?;
        let request = self.http.get(self.endpoint(path)).bearer_auth(token);
        Self::decode(self.execute(request).await?).await
    }

    async fn authed_post_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, DomainError> {
        let token = self.access_token()?;
        let request = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token)
            .json(body);
        Self::decode(self.execute(request).await?).await
    }

    async fn authed_post_multipart<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, DomainError> {
        let token = self.access_token()?;
        let request = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token)
            .multipart(form);
        Self::decode(self.execute(request).await?).await
    }
}

fn file_part(path: &Path, content_type: &str) -> Result<Part, DomainError> {
    let bytes = std::fs::read(path)
        .map_err(|e| DomainError::RequestFailed(format!("cannot read {}: {e}", path.display())))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();
    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(content_type)
        .map_err(|e| DomainError::RequestFailed(e.to_string()))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn audio_content_type(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        _ => "audio/m4a",
    }
}

fn image_content_type(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

impl<S: CredentialStore> BackendGateway for HttpBackend<S> {
    #[instrument(level = "debug", skip(self, password))]
    async fn obtain_tokens(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credentials, DomainError> {
        let request = self.http.post(self.endpoint(TOKEN_ENDPOINT)).json(&json!({
            "username": username,
            "password": password,
        }));
        let tokens: TokenResponse = Self::decode(self.execute(request).await?).await?;
        Ok(Credentials {
            access: tokens.access,
            refresh: tokens.refresh,
        })
    }

    #[instrument(level = "debug", skip(self, password))]
    async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), DomainError> {
        let request = self.http.post(self.endpoint(USERS_ENDPOINT)).json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }));
        self.execute(request).await?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        self.authed_get(PROFILES_ENDPOINT).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        self.authed_get(NOTES_ENDPOINT).await
    }

    #[instrument(level = "debug", skip(self, draft))]
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.authed_post_json(
            NOTES_ENDPOINT,
            &json!({
                "title": draft.title,
                "content": draft.content,
                "is_exam_mode": draft.is_exam_mode,
            }),
        )
        .await
    }

    #[instrument(level = "debug", skip(self))]
    async fn evaluate_expression(&self, expression: &str) -> Result<String, DomainError> {
        let response: CalculationResponse = self
            .authed_post_json(CALCULATIONS_ENDPOINT, &json!({ "expression": expression }))
            .await?;
        Ok(response.result)
    }

    #[instrument(level = "debug", skip(self))]
    async fn transcribe_audio(&self, audio_file: &Path) -> Result<String, DomainError> {
        let part = file_part(audio_file, audio_content_type(audio_file))?;
        let form = Form::new().part(SPEECH_FILE_FIELD, part);
        let response: SpeechResponse = self.authed_post_multipart(SPEECH_ENDPOINT, form).await?;
        Ok(response.transcribed_text)
    }

    #[instrument(level = "debug", skip(self))]
    async fn recognize_handwriting(&self, image_file: &Path) -> Result<String, DomainError> {
        let part = file_part(image_file, image_content_type(image_file))?;
        let form = Form::new().part(HANDWRITING_FILE_FIELD, part);
        let response: HandwrittenResponse = self
            .authed_post_multipart(HANDWRITTEN_ENDPOINT, form)
            .await?;
        Ok(response.recognized_text)
    }
}
