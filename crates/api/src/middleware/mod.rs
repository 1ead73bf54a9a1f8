//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role on top of that.

pub mod auth;
pub mod rbac;
