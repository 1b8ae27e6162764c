//! User roles known to the backend.

use std::str::FromStr;

use crate::error::CoreError;

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_VIEW: &str = "VIEW";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
    View,
}

impl Role {
    /// Roles that can be assigned when registering a new user.
    pub const ASSIGNABLE_ON_CREATE: &'static [Role] = &[Role::User, Role::Admin];

    pub const ALL: &'static [Role] = &[Role::User, Role::Admin, Role::View];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
            Self::View => ROLE_VIEW,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Case-insensitive parse; the backend is not consistent about case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            ROLE_USER => Ok(Self::User),
            ROLE_ADMIN => Ok(Self::Admin),
            ROLE_VIEW => Ok(Self::View),
            _ => Err(CoreError::UnknownValue(format!("role '{s}'"))),
        }
    }
}
