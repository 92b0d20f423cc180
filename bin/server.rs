// Bystander Generator - Web Server
// Single-page presentation plus a small JSON API

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use bystander_gen::{BystanderGenerator, Character};

/// Shared application state
///
/// The generator is read-only after startup; the one process-wide rng is
/// behind a mutex so concurrent requests serialize their draws.
#[derive(Clone)]
struct AppState {
    generator: Arc<BystanderGenerator>,
    rng: Arc<Mutex<StdRng>>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<Option<Character>> {
    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/character - Generate a fresh bystander
async fn get_character(State(state): State<AppState>) -> impl IntoResponse {
    let mut rng = state.rng.lock().unwrap();

    match state.generator.build_character(&mut *rng, None, None) {
        Ok(character) => {
            (StatusCode::OK, Json(ApiResponse::ok(Some(character)))).into_response()
        }
        Err(e) => {
            eprintln!("Error generating character: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🎲 Bystander Generator - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let generator = BystanderGenerator::from_files(
        Some(Path::new("data/traits.csv")),
        Some(Path::new("data/first-names.csv")),
        Some(Path::new("data/physical.csv")),
    )
    .unwrap_or_else(|e| {
        eprintln!("❌ Failed to load data files: {:#}", e);
        eprintln!("   Expected traits.csv, first-names.csv, physical.csv under data/");
        std::process::exit(1);
    });

    println!(
        "✓ Loaded {} traits, {} names, {} characteristics",
        generator.traits().len(),
        generator.names().len(),
        generator.characteristics().len()
    );

    // Create shared state
    let state = AppState {
        generator: Arc::new(generator),
        rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/character", get(get_character))
        .with_state(state);

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = std::env::var("BYSTANDER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/character", addr);
    println!("   UI:  http://{}", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
