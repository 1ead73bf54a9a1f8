//! Route tree assembly.

pub mod auth;
pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login             login (public)
/// /auth/forgot-password   issue reset token (public)
/// /auth/reset-password    consume reset token (public)
///
/// /videos                 list (GET), upload (POST, admin)
/// /videos/{id}            download (GET), delete (DELETE, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/videos", video::router())
}
