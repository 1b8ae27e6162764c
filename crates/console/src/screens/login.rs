//! Landing page: sign in and sign out.

use std::sync::Arc;

use uavfleet_client::{FleetGateway, Session};
use uavfleet_core::models::LoginRequest;

use crate::notice::TOKEN_EXPIRED;
use crate::routes::Route;

/// Appended to a failed login, which usually means the backend is down.
pub const NO_CONNECTION_HINT: &str = ", вероятно отсутствует связь с сервером...";

pub struct LoginScreen {
    gateway: Arc<dyn FleetGateway>,
    login_error: Option<String>,
}

impl LoginScreen {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            login_error: None,
        }
    }

    /// Enter the landing route. Arriving with `"Token expired"` closes
    /// whatever is left of the session.
    pub async fn enter(&mut self, msg: Option<&str>) {
        if msg == Some(TOKEN_EXPIRED) {
            self.logout().await;
        }
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Sign in; the fleet table is the first screen after login.
    pub async fn submit(&mut self, login: &str, password: &str) -> Option<Route> {
        let credentials = LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        };
        match self.gateway.login(&credentials).await {
            Ok(_) => {
                self.login_error = None;
                Some(Route::Vehicles)
            }
            Err(err) => {
                self.login_error = Some(format!("{}{NO_CONNECTION_HINT}", err.user_message()));
                None
            }
        }
    }

    pub async fn current_user(&self) -> Option<Session> {
        self.gateway.session().current().await
    }

    pub async fn logout(&mut self) {
        self.gateway.logout().await;
        self.login_error = None;
    }
}
