//! Route definitions for the `/videos` resource.
//!
//! ```text
//! GET    /        list
//! POST   /        upload (admin)
//! GET    /{id}    download
//! DELETE /{id}    delete (admin)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list).post(video::upload))
        .route("/{id}", get(video::download).delete(video::delete))
}
