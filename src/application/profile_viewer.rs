// src/application/profile_viewer.rs
use crate::application::BackendGateway;
use crate::domain::{DomainError, Profile};

pub struct ProfileViewer<G: BackendGateway> {
    gateway: G,
}

impl<G: BackendGateway> ProfileViewer<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetch the signed-in user's profile: the first element of the
    /// profile list response.
    pub async fn fetch_profile(&self) -> Result<Profile, DomainError> {
        self.gateway
            .fetch_profiles()
            .await?
            .into_iter()
            .next()
            .ok_or(DomainError::ProfileNotFound)
    }
}
