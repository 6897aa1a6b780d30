// src/domain/profile.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub email: String,
}

/// Profile record as served by the backend; the profile list endpoint
/// returns one entry per account and the first element is the signed-in
/// user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user: UserAccount,
    #[serde(default)]
    pub bio: String,
    pub profile_picture: Option<String>,
}
