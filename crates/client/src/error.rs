use serde::Deserialize;

/// Message the backend sends with a 401 once a token has expired.
pub const UNAUTHORIZED_PATH: &str = "Unauthorized path";

/// Errors from the fleet backend gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (connection, body decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend rejected the session token. The session is cleared and
    /// the user must sign in again.
    #[error("Session expired")]
    SessionExpired,

    /// The backend returned a non-2xx status.
    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Server message from an error body: the `message` field of a JSON body,
/// or the trimmed text otherwise.
fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.trim().to_string())
}

impl GatewayError {
    /// Map a non-2xx response onto the error taxonomy.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body);
        if status == 401 && message == UNAUTHORIZED_PATH {
            return Self::SessionExpired;
        }
        Self::Api { status, message }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Localised text shown to the user: `"Ошибка: <message>"`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(err) => format!("Ошибка: {err}"),
            Self::SessionExpired => format!("Ошибка: {UNAUTHORIZED_PATH}"),
            Self::Api { status, message } if message.is_empty() => {
                format!("Ошибка: HTTP {status}")
            }
            Self::Api { message, .. } => format!("Ошибка: {message}"),
        }
    }
}
