//! Domain logic for the raw video portal.
//!
//! Pure functions and types only -- no I/O, no framework dependencies.
//! The `db` and `api` crates build on top of this.

pub mod error;
pub mod roles;
pub mod types;
pub mod video;
