//! Request handlers.
//!
//! Handlers validate input via `vportal_core`, delegate persistence to the
//! repositories in `vportal_db`, and map failures through [`crate::error::AppError`].

pub mod auth;
pub mod video;
