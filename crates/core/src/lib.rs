//! UAV fleet domain library.
//!
//! Holds the wire records exchanged with the fleet backend and every piece
//! of derived view state computed from them: date and duration conversions,
//! dense display numbering with filtering, maintenance and insurance
//! countdowns, and edit snapshots. Nothing in this crate performs I/O.

pub mod countdown;
pub mod dates;
pub mod duration;
pub mod edit;
pub mod error;
pub mod listing;
pub mod models;
pub mod roles;
pub mod statuses;
pub mod types;
pub mod validation;
