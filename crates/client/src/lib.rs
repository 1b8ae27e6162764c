//! HTTP gateway to the fleet backend.
//!
//! [`FleetGateway`] is the seam the screens program against; [`FleetApi`]
//! implements it over HTTP. The signed-in user lives in an explicit
//! [`SessionContext`] shared by the gateway and the screens.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;

pub use api::FleetApi;
pub use config::ClientConfig;
pub use error::GatewayError;
pub use gateway::{FileUpload, FleetGateway, GatewayResult};
pub use session::{Session, SessionContext};
