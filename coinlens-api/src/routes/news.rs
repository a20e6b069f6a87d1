//! News-related API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::AppState;

/// Query parameters for the news feed
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// Free-text search matched against article titles
    pub query: Option<String>,
    /// Compact display mode: caps the feed at 6 articles
    #[serde(default)]
    pub simplified: bool,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/news", get(get_news))
}

/// GET /api/news - Get the filtered crypto news feed
///
/// An empty feed is a 200 carrying a display message, never an error;
/// only upstream failures surface as 5xx.
async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> impl IntoResponse {
    let query = params.query.unwrap_or_default();

    match state.news_service.get_news(&query, params.simplified).await {
        Ok(feed) => (StatusCode::OK, Json(feed)).into_response(),
        Err(e) => {
            error!("Failed to fetch news: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to fetch news: {}", e)
                })),
            )
                .into_response()
        }
    }
}
