/// Server-assigned identities and display sequence numbers.
pub type DbId = i64;

/// All absolute timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Sentinel id sent to the backend for records it has not assigned yet.
pub const UNASSIGNED_ID: DbId = -1;
