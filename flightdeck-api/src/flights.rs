use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use flightdeck_core::models::Flight;
use flightdeck_core::search::FlightQuery;
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Raw query string; blank values count as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightParams {
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

impl FlightParams {
    pub fn into_query(self) -> Result<FlightQuery, AppError> {
        Ok(FlightQuery {
            flight_number: present(self.flight_number),
            airline: present(self.airline),
            destination: present(self.destination),
            date: parse_date(present(self.date))?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub date: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(get_flights))
        .route("/api/search", get(search_flights))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/flights
/// Empty array when nothing matches; never 404.
pub async fn get_flights(
    State(state): State<AppState>,
    params: Result<Query<FlightParams>, QueryRejection>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let query = params.into_query()?;

    let lookup = state.lookup.clone();
    let flights = tokio::task::spawn_blocking(move || {
        lookup.lookup(&query, Utc::now().naive_utc())
    })
    .await?;

    tracing::debug!(results = flights.len(), "Flight lookup complete");
    Ok(Json(flights))
}

/// GET /api/search?q=...
/// Free text in, flights out; 422 when the text resolves to nothing.
pub async fn search_flights(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let text = present(params.q).ok_or_else(|| AppError::ValidationError("Query is required".to_string()))?;
    let date = parse_date(present(params.date))?;

    let lookup = state.lookup.clone();
    let flights = tokio::task::spawn_blocking(move || {
        lookup.search_text(&text, date, Utc::now().naive_utc())
    })
    .await?
    .map_err(AppError::from_core)?;

    Ok(Json(flights))
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_date(value: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    value
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|_| AppError::ValidationError(format!("Invalid date '{}', expected YYYY-MM-DD", d)))
        })
        .transpose()
}
