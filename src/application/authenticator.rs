// src/application/authenticator.rs
use crate::application::BackendGateway;
use crate::domain::{Credentials, DomainError};
use tracing::warn;

pub struct Authenticator<G: BackendGateway> {
    gateway: G,
}

impl<G: BackendGateway> Authenticator<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Exchange credentials for a token pair.
    ///
    /// Every failure collapses into `InvalidCredentials`: the login
    /// screen shows one fixed message regardless of cause.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credentials, DomainError> {
        match self.gateway.obtain_tokens(username, password).await {
            Ok(credentials) => Ok(credentials),
            Err(err) => {
                warn!(%err, "Login rejected");
                Err(DomainError::InvalidCredentials)
            }
        }
    }

    /// Create a new account; the caller logs in separately afterwards.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), DomainError> {
        self.gateway.register_user(username, email, password).await
    }
}
