//! Dashboard user account.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::listing::{DisplayRow, SortKey};
use crate::models::null_as_default;
use crate::roles::Role;
use crate::types::{DbId, UNASSIGNED_ID};

/// Placeholder the backend sends instead of real passwords and tokens.
pub const PROTECTED_PLACEHOLDER: &str = "[protected]";

/// Message shown when a profile is saved without any edits.
pub const NO_PROFILE_CHANGES: &str = "Нет изменений в данных пользователя";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: DbId,
    pub login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub surname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    /// Raw role string; see [`User::role`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
}

impl User {
    pub fn role(&self) -> Result<Role, CoreError> {
        self.role.parse()
    }

    /// `"Профиль пользователя login (lastname, surname)"`.
    pub fn profile_title(&self) -> String {
        format!(
            "Профиль пользователя {} ({}, {})",
            self.login, self.lastname, self.surname
        )
    }
}

impl DisplayRow for User {
    fn display_id(&self) -> DbId {
        self.id
    }

    fn set_display_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Ascending(&self.login)
    }

    fn filter_fields(&self) -> Vec<&str> {
        vec![
            self.surname.as_str(),
            self.lastname.as_str(),
            self.login.as_str(),
            self.role.as_str(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Profile edit
// ---------------------------------------------------------------------------

/// Editable fields of the user profile screen. The password field starts
/// out as the placeholder; anything else counts as a new password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileEdit {
    pub surname: String,
    pub lastname: String,
    pub password: String,
    pub role: Role,
    pub enabled: bool,
}

impl UserProfileEdit {
    /// Start editing `user`. Unknown role strings fall back to `USER`.
    pub fn from_user(user: &User) -> Self {
        Self {
            surname: user.surname.clone(),
            lastname: user.lastname.clone(),
            password: PROTECTED_PLACEHOLDER.to_string(),
            role: user.role().unwrap_or(Role::User),
            enabled: user.enabled,
        }
    }

    /// Whether any field differs from the loaded user.
    pub fn has_changes(&self, loaded: &User) -> bool {
        self.surname != loaded.surname
            || self.lastname != loaded.lastname
            || self.password != PROTECTED_PLACEHOLDER
            || !self.role.as_str().eq_ignore_ascii_case(&loaded.role)
            || self.enabled != loaded.enabled
    }

    /// The full record sent to `PUT /updateUser`.
    pub fn to_user(&self, login: &str) -> User {
        User {
            id: UNASSIGNED_ID,
            login: login.to_string(),
            surname: self.surname.clone(),
            lastname: self.lastname.clone(),
            password: self.password.clone(),
            role: self.role.as_str().to_string(),
            enabled: self.enabled,
            token: PROTECTED_PLACEHOLDER.to_string(),
        }
    }
}
