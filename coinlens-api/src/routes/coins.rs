//! Coin-related API endpoints

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

/// Query parameters for listing coins
#[derive(Debug, Deserialize)]
pub struct CoinsQuery {
    /// Maximum number of coins to return
    pub limit: Option<usize>,
}

/// Create coin routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/coins", get(list_coins))
}

/// GET /api/coins - List coins with global market stats
async fn list_coins(
    State(state): State<AppState>,
    Query(params): Query<CoinsQuery>,
) -> impl IntoResponse {
    match state.coin_service.list_coins(params.limit).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            error!("Failed to fetch coins: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to fetch coins: {}", e)
                })),
            )
                .into_response()
        }
    }
}
