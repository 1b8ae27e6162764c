//! Create forms for vehicles and users.
//!
//! Required fields carry the message shown under the input
//! (`"Обязательное поле"`).

use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::models::user::PROTECTED_PLACEHOLDER;
use crate::models::vehicle::KNOWN_VEHICLE_TYPES;
use crate::models::{User, Vehicle};
use crate::roles::Role;
use crate::types::UNASSIGNED_ID;

pub const REQUIRED_FIELD: &str = "Обязательное поле";

/// Required field whose value is sent trimmed.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(REQUIRED_FIELD.into()));
    }
    Ok(())
}

fn validate_vehicle_type(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || KNOWN_VEHICLE_TYPES.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new("vehicle_type").with_message("Неизвестный тип БВС".into()))
}

fn validate_new_user_role(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    match value.parse::<Role>() {
        Ok(role) if Role::ASSIGNABLE_ON_CREATE.contains(&role) => Ok(()),
        _ => Err(ValidationError::new("role").with_message("Недопустимая роль".into())),
    }
}

/// Add-vehicle form.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewVehicle {
    #[validate(
        length(min = 1, message = "Обязательное поле"),
        custom(function = "validate_vehicle_type")
    )]
    pub vehicle_type: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub vehicle_id: String,
    pub description: String,
}

impl NewVehicle {
    /// Validated record for `POST /addUav`.
    pub fn into_vehicle(self) -> Result<Vehicle, CoreError> {
        check(&self)?;
        Ok(Vehicle {
            id: UNASSIGNED_ID,
            vehicle_type: self.vehicle_type,
            vehicle_id: self.vehicle_id.trim().to_string(),
            description: self.description,
        })
    }
}

/// Add-user form. New users are enabled immediately.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Обязательное поле"))]
    pub surname: String,
    #[validate(length(min = 1, message = "Обязательное поле"))]
    pub lastname: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub login: String,
    #[validate(length(min = 1, message = "Обязательное поле"))]
    pub password: String,
    #[validate(
        length(min = 1, message = "Обязательное поле"),
        custom(function = "validate_new_user_role")
    )]
    pub role: String,
}

impl NewUser {
    /// Validated record for `POST /register`.
    pub fn into_user(self) -> Result<User, CoreError> {
        check(&self)?;
        let role = self.role.parse::<Role>()?;
        Ok(User {
            id: UNASSIGNED_ID,
            login: self.login.trim().to_string(),
            surname: self.surname,
            lastname: self.lastname,
            password: self.password,
            role: role.as_str().to_string(),
            enabled: true,
            token: PROTECTED_PLACEHOLDER.to_string(),
        })
    }
}

/// Per-field messages, ordered by field name.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Messages to show under each input; empty when the form is valid.
pub fn form_errors<T: Validate>(form: &T) -> BTreeMap<String, Vec<String>> {
    match form.validate() {
        Ok(()) => BTreeMap::new(),
        Err(errors) => field_messages(&errors),
    }
}

/// Run the derived validation and fold every message into one
/// [`CoreError::Validation`].
pub fn check<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate().map_err(|errors| {
        let text = field_messages(&errors)
            .into_iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
        CoreError::Validation(text)
    })
}
