// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not logged in (run `starlus login` first)")]
    NotAuthenticated,
    #[error("Session expired, log in again")]
    SessionExpired,
    #[error("No profile found for this account")]
    ProfileNotFound,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Credential storage error: {0}")]
    Storage(String),
}
