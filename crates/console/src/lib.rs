//! Console front end of the fleet dashboard.
//!
//! Screens are view-state controllers: they load through a
//! [`uavfleet_client::FleetGateway`], derive what is shown through
//! `uavfleet_core`, and record user-visible messages and redirects in a
//! [`notice::Notice`]. [`render`] turns the derived state into text.

pub mod notice;
pub mod render;
pub mod routes;
pub mod screens;
