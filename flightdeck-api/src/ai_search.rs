use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use flightdeck_core::search::ResolvedIntent;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AiSearchRequest {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchResponse {
    #[serde(flatten)]
    pub intent: ResolvedIntent,
    pub original_query: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/ai-search", post(ai_search))
}

/// POST /api/ai-search
/// Resolves free text into flight number, airline and destination.
pub async fn ai_search(
    State(state): State<AppState>,
    body: Result<Json<AiSearchRequest>, JsonRejection>,
) -> Result<Json<AiSearchResponse>, AppError> {
    let query = body
        .ok()
        .and_then(|Json(req)| req.query)
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError("Query is required".to_string()))?;

    let intent = state.lookup.normalizer().resolve(&query);
    tracing::debug!(?intent, "Resolved query");

    Ok(Json(AiSearchResponse {
        intent,
        original_query: query,
    }))
}
