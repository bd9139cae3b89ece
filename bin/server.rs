// Numerology Engine - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use numerology_engine::{Config, InsightType, LanguageCode, Meaning, MeaningResolver, Reading};

/// Shared application state
#[derive(Clone)]
struct AppState {
    resolver: Arc<MeaningResolver>,
    default_language: LanguageCode,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        let body = Self {
            success: true,
            data: Some(data),
            error: None,
        };
        (StatusCode::OK, Json(body)).into_response()
    }

    fn bad_request(message: impl ToString) -> Response {
        let body = Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct LanguageResponse {
    code: &'static str,
    name: &'static str,
}

#[derive(Debug, Deserialize)]
struct ReadingQuery {
    birthdate: Option<String>,
    name: Option<String>,
    lang: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Blank query values count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl AppState {
    fn language(&self, lang: &Option<String>) -> LanguageCode {
        present(lang)
            .map(LanguageCode::parse_or_default)
            .unwrap_or(self.default_language)
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/languages - Supported languages
async fn get_languages() -> Response {
    let languages: Vec<LanguageResponse> = LanguageCode::ALL
        .iter()
        .map(|l| LanguageResponse {
            code: l.code(),
            name: l.name(),
        })
        .collect();
    ApiResponse::ok(languages)
}

/// GET /api/reading?birthdate=&name=&lang=&date= - Full reading with meanings
async fn get_reading(State(state): State<AppState>, Query(query): Query<ReadingQuery>) -> Response {
    let target = match present(&query.date) {
        Some(raw) => match raw.parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => {
                return ApiResponse::<()>::bad_request(format!(
                    "Invalid date format: {:?} (expected YYYY-MM-DD)",
                    raw
                ))
            }
        },
        None => Local::now().date_naive(),
    };

    match Reading::calculate(present(&query.birthdate), present(&query.name), target) {
        Ok(reading) => ApiResponse::ok(reading.insights(&state.resolver, state.language(&query.lang))),
        Err(e) => {
            warn!(error = %e, "reading rejected");
            ApiResponse::<()>::bad_request(e)
        }
    }
}

/// GET /api/name/:name - Name numbers with meanings
async fn get_name_reading(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<LangQuery>,
) -> Response {
    // Path has already percent-decoded the segment
    match Reading::calculate(None, Some(&name), Local::now().date_naive()) {
        Ok(reading) => ApiResponse::ok(reading.insights(&state.resolver, state.language(&query.lang))),
        Err(e) => ApiResponse::<()>::bad_request(e),
    }
}

/// GET /api/meanings/:type/:number?lang= - Meaning of one number
async fn get_meaning(
    State(state): State<AppState>,
    Path((kind, number)): Path<(String, String)>,
    Query(query): Query<LangQuery>,
) -> Response {
    let kind: InsightType = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return ApiResponse::<()>::bad_request(e),
    };
    let number: u32 = match number.parse() {
        Ok(n) => n,
        Err(_) => return ApiResponse::<()>::bad_request(format!("Invalid number: {}", number)),
    };

    let meaning: Meaning = state.resolver.resolve(kind, number, state.language(&query.lang));
    ApiResponse::ok(meaning)
}

fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(get_languages))
        .route("/reading", get(get_reading))
        .route("/name/:name", get(get_name_reading))
        .route("/meanings/:type/:number", get(get_meaning))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let level = std::env::var("NUMEROLOGY_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("🔢 Numerology Engine - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = Config::from_env();
    let state = AppState {
        resolver: Arc::new(config.build_resolver()),
        default_language: config.default_language,
    };
    info!(language = %config.default_language, "meaning resolver ready");

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server_addr))?;

    println!("\n🚀 Server running on http://{}", config.server_addr);
    println!("   API: http://{}/api/reading?birthdate=1990-10-15", config.server_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app(state))
        .await
        .context("Failed to start server")?;
    Ok(())
}
