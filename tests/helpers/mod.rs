#![allow(dead_code)]

use anyhow::{Context, Result};
use starlus::application::CredentialStore;
use starlus::domain::Credentials;
use starlus::infrastructure::{FileCredentialStore, HttpBackend};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::MockServer;

/// Test fixture wiring a stubbed backend to an isolated credential file
pub struct TestHarness {
    _temp_dir: TempDir,
    temp_path: PathBuf,
    pub server: MockServer,
    pub store: FileCredentialStore,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let temp_path = temp_dir.path().to_path_buf();
        let server = MockServer::start().await;
        let store = FileCredentialStore::new(temp_path.join("credentials.json"));

        Ok(Self {
            _temp_dir: temp_dir,
            temp_path,
            server,
            store,
        })
    }

    /// Base URL of the stubbed API, mirroring the backend's `/api/` prefix
    pub fn api_base(&self) -> String {
        format!("{}/api/", self.server.uri())
    }

    /// HTTP backend pointed at the stub server, reading this harness's store
    pub fn backend(&self) -> HttpBackend<FileCredentialStore> {
        HttpBackend::new(&self.api_base(), self.store.clone())
    }

    /// Directory usable as `--data-dir`; the store lives inside it
    pub fn data_dir(&self) -> &Path {
        &self.temp_path
    }

    /// Seed stored credentials as if a login had completed earlier
    pub fn store_credentials(&self, access: &str, refresh: &str) -> Result<()> {
        self.store
            .store(&Credentials {
                access: access.to_string(),
                refresh: refresh.to_string(),
            })
            .context("Failed to seed credentials")
    }

    /// Write a small fixture file to upload in multipart tests
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.temp_path.join(name);
        std::fs::write(&path, bytes).context("Failed to write fixture file")?;
        Ok(path)
    }
}

/// Canned JSON bodies matching the backend's serializers
pub mod bodies {
    use serde_json::{json, Value};

    pub fn token(access: &str, refresh: &str) -> Value {
        json!({ "access": access, "refresh": refresh })
    }

    pub fn note(id: i64, title: &str, content: &str, is_exam_mode: bool) -> Value {
        json!({
            "id": id,
            "title": title,
            "content": content,
            "created_at": "2025-01-15T10:00:00Z",
            "is_exam_mode": is_exam_mode,
        })
    }

    pub fn profile(username: &str, email: &str) -> Value {
        json!({
            "user": { "username": username, "email": email },
            "bio": "",
            "profile_picture": null,
        })
    }
}
