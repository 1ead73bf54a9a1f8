//! Well-known role name constants.
//!
//! Roles are stored as plain strings on the credential record; these must
//! match whatever seeds the `users` table.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
