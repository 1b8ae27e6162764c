//! Explicit session state shared by the gateway and the screens.
//!
//! A session is opened by a successful login and closed by logout or by
//! the backend reporting an expired token.

use std::sync::Arc;

use tokio::sync::RwLock;

use uavfleet_core::models::LoginResponse;
use uavfleet_core::roles::Role;

/// The signed-in user as reported by `POST /login`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub login: String,
    pub role: String,
}

impl Session {
    /// Missing fields in the login response become empty strings.
    pub fn from_response(response: LoginResponse) -> Self {
        Self {
            token: response.token.unwrap_or_default(),
            login: response.login.unwrap_or_default(),
            role: response.role.unwrap_or_default(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role.parse::<Role>().ok()
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|role| role.is_admin())
    }
}

/// Cloneable handle to the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the session opened by a login.
    pub async fn login(&self, session: Session) {
        tracing::info!(login = %session.login, role = %session.role, "Session opened");
        *self.inner.write().await = Some(session);
    }

    /// Close the session on user request.
    pub async fn logout(&self) {
        if let Some(session) = self.inner.write().await.take() {
            tracing::info!(login = %session.login, "Session closed");
        }
    }

    /// Drop the session after the backend rejected its token.
    pub async fn expire(&self) {
        if let Some(session) = self.inner.write().await.take() {
            tracing::warn!(login = %session.login, "Session expired");
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    pub async fn is_active(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Token for the `Authorization: Bearer` header.
    pub async fn bearer(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|session| session.token.clone())
    }
}
