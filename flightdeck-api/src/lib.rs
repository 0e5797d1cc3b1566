use axum::{
    routing::get,
    Router,
    http::Method,
    extract::State,
    Json,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod state;
pub mod flights;
pub mod ai_search;
pub mod error;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .merge(flights::routes())
        .merge(ai_search::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<Value> {
    let store = state.lookup.store();
    Json(json!({
        "status": "ok",
        "airlines": store.airlines().len(),
        "airports": store.airports().len(),
    }))
}
