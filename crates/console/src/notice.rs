//! Folding gateway failures into view state.
//!
//! A failed call never aborts a screen: it resolves to an empty/default
//! value and leaves a user-visible message behind. An expired session also
//! requests a redirect to the landing route.

use uavfleet_client::{GatewayError, GatewayResult};

use crate::routes::Route;

/// State passed to the landing route after the backend rejected the token.
pub const TOKEN_EXPIRED: &str = "Token expired";

/// Confirmation asked before every delete.
pub const CONFIRM_DELETE: &str = "Действительно удалить?";

pub const CHANGES_SAVED: &str = "Изменения сохранены";

pub const NO_FILE_SELECTED: &str = "Файл не выбран";

/// Message and pending navigation left by the last screen action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub message: Option<String>,
    pub redirect: Option<Route>,
}

impl Notice {
    pub fn clear(&mut self) {
        self.message = None;
        self.redirect = None;
    }

    pub fn say(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Record a gateway failure.
    pub fn fail(&mut self, err: &GatewayError) {
        self.message = Some(err.user_message());
        if err.is_session_expired() {
            self.redirect = Some(Route::Landing {
                msg: Some(TOKEN_EXPIRED.to_string()),
            });
        }
    }

    /// The value of a gateway call, or its default after recording the
    /// failure.
    pub fn absorb<T: Default>(&mut self, result: GatewayResult<T>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                self.fail(&err);
                T::default()
            }
        }
    }

    /// Like [`Notice::absorb`] for calls without a payload; reports whether
    /// the call succeeded.
    pub fn succeeded(&mut self, result: GatewayResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                self.fail(&err);
                false
            }
        }
    }

    pub fn session_expired(&self) -> bool {
        matches!(&self.redirect, Some(Route::Landing { msg: Some(msg) }) if msg == TOKEN_EXPIRED)
    }
}
