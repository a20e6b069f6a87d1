//! Coinlens Dashboard API Server
//!
//! HTTP API server that serves crypto news and coin data fetched from the
//! RapidAPI upstreams.

mod routes;

use anyhow::Context;
use axum::{
    http::{header, Method},
    Router,
};
use coinlens_coins::CoinRankingClient;
use coinlens_news::CryptoNewsClient;
use coinlens_services::{CoinService, NewsService, NewsServiceConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
    pub coin_service: Arc<CoinService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,coinlens_api=debug")),
        )
        .init();

    info!("Starting Coinlens Dashboard API");

    // Both upstreams sit behind the same RapidAPI subscription
    let api_key = std::env::var("RAPIDAPI_KEY")
        .context("RAPIDAPI_KEY must be set (RapidAPI subscription key)")?;

    // Initialize clients
    let news_client = CryptoNewsClient::new(api_key.clone());
    let coins_client = CoinRankingClient::new(api_key);

    // Initialize services
    let news_service = Arc::new(NewsService::new(news_client, NewsServiceConfig::default()));
    let coin_service = Arc::new(CoinService::new(coins_client));
    info!("News and coin services initialized");

    let state = AppState {
        news_service,
        coin_service,
    };

    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
