//! Screen controllers. Each one loads through the gateway, derives its
//! view state through `uavfleet_core` and leaves messages in a [`Notice`].
//!
//! [`Notice`]: crate::notice::Notice

pub mod activity;
pub mod documents;
pub mod engine;
pub mod failures;
pub mod forms;
pub mod gallery;
pub mod login;
pub mod maintenance;
pub mod table;
pub mod users;
pub mod vehicle_card;
pub mod vehicles;

pub use activity::ActivityLog;
pub use documents::DocumentsTab;
pub use engine::EngineTab;
pub use failures::{FailureHistory, FailuresTab};
pub use forms::{AddUserForm, AddVehicleForm};
pub use gallery::{Gallery, GalleryImage};
pub use login::LoginScreen;
pub use maintenance::MaintenanceTab;
pub use table::RecordTable;
pub use users::{UserCard, UserList};
pub use vehicle_card::VehicleCard;
pub use vehicles::VehicleTable;
