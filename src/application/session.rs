// src/application/session.rs
use crate::domain::{Credentials, DomainError, SessionState};
use tracing::{debug, info};

/// Port for the durable token storage.
///
/// Implementations overwrite on store, return `None` when nothing has
/// been stored, and make `clear` idempotent.
pub trait CredentialStore {
    fn store(&self, credentials: &Credentials) -> Result<(), DomainError>;
    fn read(&self) -> Result<Option<Credentials>, DomainError>;
    fn clear(&self) -> Result<(), DomainError>;
}

/// Owns the session state machine.
///
/// Nothing else mutates the state: the rest of the code reads the
/// projection (`state`, `is_authenticated`) and drives transitions
/// through `complete_login`, `logout` and `mark_expired`. The session
/// is authenticated exactly when credentials exist in the store.
pub struct SessionManager<S: CredentialStore> {
    store: S,
    state: SessionState,
}

impl<S: CredentialStore> SessionManager<S> {
    pub fn new(store: S) -> Result<Self, DomainError> {
        let state = match store.read()? {
            Some(_) => SessionState::Authenticated,
            None => SessionState::Unauthenticated,
        };
        debug!(?state, "Session state derived from credential store");
        Ok(Self { store, state })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Persist the token pair and enter `Authenticated`. A re-login
    /// overwrites whatever was stored before.
    pub fn complete_login(&mut self, credentials: Credentials) -> Result<(), DomainError> {
        self.store.store(&credentials)?;
        self.state = SessionState::Authenticated;
        info!("Session authenticated");
        Ok(())
    }

    /// Clear the stored tokens and return to `Unauthenticated`.
    pub fn logout(&mut self) -> Result<(), DomainError> {
        self.store.clear()?;
        self.state = SessionState::Unauthenticated;
        info!("Session logged out");
        Ok(())
    }

    /// The backend rejected a stored token: clear it and enter
    /// `Expired` so the next command asks for a fresh login instead of
    /// replaying the stale credential.
    pub fn mark_expired(&mut self) -> Result<(), DomainError> {
        self.store.clear()?;
        self.state = SessionState::Expired;
        info!("Session marked expired, stored tokens cleared");
        Ok(())
    }
}
