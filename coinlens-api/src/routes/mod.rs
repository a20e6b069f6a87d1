//! API route definitions

mod coins;
mod health;
mod news;

use crate::AppState;
use axum::Router;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(news::routes())
        .merge(coins::routes())
        .merge(health::routes())
}
