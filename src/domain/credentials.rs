// src/domain/credentials.rs
use serde::{Deserialize, Serialize};

/// Token pair returned by the backend on login.
///
/// The access token is attached to every authenticated request. The
/// refresh token is persisted alongside it but never sent; the backend's
/// refresh endpoint is not part of this client's session contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub access: String,
    pub refresh: String,
}
