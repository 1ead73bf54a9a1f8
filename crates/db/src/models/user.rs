//! Credential record model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use vportal_core::types::{DbId, Timestamp};

/// Full credential row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Rows are created out-of-band (seeding, fixtures); the service reads them
/// for login and only ever writes `password_hash` via the reset flow.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a credential record.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}
