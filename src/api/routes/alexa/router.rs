//! Router for the voice assistant skill API

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::public::{AlexaRequest, AlexaResponse};
use super::skill::handle_request;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::menu::SheetCsvSource;

type SharedState = Arc<AppState>;

async fn alexa_handler(
    State(state): State<SharedState>,
    Json(req): Json<AlexaRequest>,
) -> Result<Json<AlexaResponse>, ApiError> {
    // The sheet is fetched again on every request
    let source = SheetCsvSource::new(&state.config.sheet_csv_url);
    let today = state.config.today();

    let resp = handle_request(&req, &source, today).await?;
    Ok(Json(resp))
}

/// Create the skill router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(alexa_handler))
}
