//! demo-checkout HTTP Server
//!
//! Axum-based host for the checkout frontend. Serves the built WASM bundle
//! and a health check; there is no payment API behind it.

mod config;
mod handlers;
mod state;

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;
use crate::state::AppState;

/// Health check plus the static bundle, falling back to `index.html`
fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "⚠ {} has no index.html - build the frontend first",
            config.static_dir.display()
        );
        tracing::warn!("  trunk build --release crates/checkout-web/index.html --dist static");
    }

    let state = AppState::default();
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 demo-checkout running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Checkout page ({})", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn static_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>checkout</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = static_dir();
        let (status, body) = get_body(router(AppState::default(), dir.path()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["amount"], "$99.99");
        assert_eq!(json["settle_after_ms"], 2000);
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dir = static_dir();
        let (status, body) = get_body(router(AppState::default(), dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = static_dir();
        let (status, body) =
            get_body(router(AppState::default(), dir.path()), "/somewhere/else").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>checkout</html>");
    }
}
