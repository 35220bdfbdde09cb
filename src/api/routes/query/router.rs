//! Router for the query API

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use super::public;
use crate::ai::answer_query;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Answer a single question from the search index
async fn query(
    State(state): State<SharedState>,
    Json(payload): Json<public::QueryRequest>,
) -> Result<Json<public::QueryResponse>, crate::api::public::ApiError> {
    tracing::debug!("Received query: {}", payload.query);

    let response = answer_query(&state.config, &state.counter, &payload.query).await?;

    Ok(Json(public::QueryResponse { response }))
}

/// Create the query router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(query))
}
