use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::{Role, User};
use crate::validation::{validate_email, validate_password, ValidationError};

/// Credential exchange boundary. Implemented by the HTTP client; tests swap
/// in an in-memory fake.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError>;
    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    /// A login or register call is in flight.
    Authenticating,
    Authenticated(User),
}

/// Outcome of the access check for a role-restricted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Credentials are still being exchanged; do not redirect yet.
    Pending,
    Denied,
}

/// Holds the authenticated principal and gates the finance views.
///
/// One guard per application handle; cloned into the services so any of them
/// can invalidate the session when the backend rejects its credentials.
#[derive(Clone)]
pub struct SessionGuard {
    auth: Arc<dyn AuthBackend>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionGuard {
    pub fn new(auth: Arc<dyn AuthBackend>) -> Self {
        Self {
            auth,
            state: Arc::new(RwLock::new(SessionState::Anonymous)),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        match &*self.state.read().await {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// Gate for views restricted to finance staff.
    pub async fn check(&self) -> Access {
        match &*self.state.read().await {
            SessionState::Authenticating => Access::Pending,
            SessionState::Authenticated(user) if user.role == Role::Finance => Access::Granted,
            _ => Access::Denied,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.authenticate(email, password, false).await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.authenticate(email, password, true).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        register: bool,
    ) -> Result<User, ApiError> {
        validate_credentials(email, password)?;

        *self.state.write().await = SessionState::Authenticating;

        let result = if register {
            self.auth.register(email, password).await
        } else {
            self.auth.login(email, password).await
        };

        match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "session established");
                *self.state.write().await = SessionState::Authenticated(user.clone());
                Ok(user)
            }
            Err(err) => {
                *self.state.write().await = SessionState::Anonymous;
                Err(err)
            }
        }
    }

    /// Ends the session. The local state is cleared even when the backend
    /// call fails; the cookie is the backend's problem at that point.
    pub async fn logout(&self) {
        if let Err(err) = self.auth.logout().await {
            tracing::warn!(error = %err, "logout request failed; clearing session anyway");
        }
        *self.state.write().await = SessionState::Anonymous;
    }

    /// Called by services when any credentialed call comes back unauthorized.
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        if *state != SessionState::Anonymous {
            tracing::warn!("session rejected by backend; returning to anonymous");
            *state = SessionState::Anonymous;
        }
    }
}

/// Client-side credential checks. Nothing is dispatched when these fail.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)?;
    Ok(())
}
