//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, Uri, header},
    routing::get,
};
use card::{CardConfig, card_router};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Settings read from the environment at startup
#[derive(Debug)]
struct ApiSettings {
    bind_addr: SocketAddr,
    frontend_origins: Vec<http::HeaderValue>,
    card: CardConfig,
}

impl ApiSettings {
    fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes `std::env::var`
    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("API_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("API_BIND_ADDR must be a socket address")?;

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let mut card = if cfg!(debug_assertions) {
            CardConfig::development()
        } else {
            CardConfig::default()
        };
        if let Some(max) = lookup("CARD_MAX_INPUT_LENGTH") {
            let max: usize = max
                .trim()
                .parse()
                .context("CARD_MAX_INPUT_LENGTH must be a positive integer")?;
            anyhow::ensure!(max > 0, "CARD_MAX_INPUT_LENGTH must be a positive integer");
            card.max_input_length = max;
        }

        Ok(Self {
            bind_addr,
            frontend_origins,
            card,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<http::HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

/// Problem JSON for unknown routes
async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

fn build_app(settings: &ApiSettings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(settings.frontend_origins.clone())
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api/card", card_router(settings.card.clone()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,card=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ApiSettings::from_env()?;

    tracing::info!(
        max_input_length = settings.card.max_input_length,
        origins = settings.frontend_origins.len(),
        "Card service configured"
    );

    let app = build_app(&settings);

    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<ApiSettings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiSettings::from_lookup(|key| vars.get(key).cloned())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://a.test");
        assert_eq!(origins[1], "http://b.test");
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.bind_addr.port(), 31113);
        assert_eq!(settings.frontend_origins.len(), 2);
    }

    #[test]
    fn test_max_input_length_override() {
        let settings = settings(&[("CARD_MAX_INPUT_LENGTH", "20")]).unwrap();
        assert_eq!(settings.card.max_input_length, 20);
    }

    #[test]
    fn test_max_input_length_rejects_zero_and_garbage() {
        assert!(settings(&[("CARD_MAX_INPUT_LENGTH", "0")]).is_err());
        assert!(settings(&[("CARD_MAX_INPUT_LENGTH", "-5")]).is_err());
        assert!(settings(&[("CARD_MAX_INPUT_LENGTH", "lots")]).is_err());
    }

    #[test]
    fn test_bad_bind_addr() {
        assert!(settings(&[("API_BIND_ADDR", "localhost")]).is_err());
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_app(&settings(&[]).unwrap());
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_card_routes_nested() {
        let app = build_app(&settings(&[]).unwrap());
        let (status, body) = send(
            app,
            post_json("/api/card/check", r#"{"number":"4242 4242 4242 4242"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["isValid"], true);
        assert_eq!(body["cardType"], "visa");
    }

    #[tokio::test]
    async fn test_configured_limit_applies() {
        let app = build_app(&settings(&[("CARD_MAX_INPUT_LENGTH", "10")]).unwrap());
        let (status, body) = send(
            app,
            post_json("/api/card/check", r#"{"number":"4242 4242 4242 4242"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["field"], "number");
    }

    #[tokio::test]
    async fn test_unknown_route_is_problem_json() {
        let app = build_app(&settings(&[]).unwrap());
        let request = Request::builder()
            .uri("/api/card/nope")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], 404);
        assert_eq!(body["detail"], "No route for /api/card/nope");
    }
}
