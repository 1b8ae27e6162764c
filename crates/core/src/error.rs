use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Record not found: {entity} with record id {record_id}")]
    NotFound { entity: &'static str, record_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown value: {0}")]
    UnknownValue(String),
}
