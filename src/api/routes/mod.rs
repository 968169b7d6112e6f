//! API routes module

pub mod alexa;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Voice assistant skill endpoint
        .nest("/alexa", alexa::router())
}
