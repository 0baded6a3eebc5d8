//! Isolation procedure search server.
//!
//! Exposes the `isoproc-core` engine as a single RPC-style REST endpoint plus
//! a health check, with OpenAPI/Swagger documentation. The server is
//! stateless: each request carries its own document text and is parsed from
//! scratch.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::schema::{HealthRes, ProcedureDetail, SearchReq, SearchRes, StepDetail};
use api_shared::HealthService;
use isoproc_core::SearchService;

/// Application state shared across REST API handlers
///
/// Carries the search service only; the service itself is stateless, so
/// cloning the state per request shares nothing mutable.
#[derive(Clone)]
struct AppState {
    search_service: SearchService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, search_isolation_procedure),
    components(schemas(HealthRes, SearchReq, SearchRes, ProcedureDetail, StepDetail))
)]
struct ApiDoc;

/// Main entry point for the isolation procedure search server
///
/// Starts the REST server on the configured address (default: 0.0.0.0:3000)
/// with the search endpoint, a health check, and Swagger UI.
///
/// # Environment Variables
/// - `ISOPROC_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("isoproc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("ISOPROC_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting isolation procedure search on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}

/// Builds the application router. Factored out so tests can drive it
/// directly without binding a socket.
fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/search-isolation-procedure",
            post(search_isolation_procedure),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            search_service: SearchService::new(),
        })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the search service.
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/search-isolation-procedure",
    request_body = SearchReq,
    responses(
        (status = 200, description = "Search outcome, including parsed procedure when found", body = SearchRes),
        (status = 422, description = "Malformed request body")
    )
)]
/// Search for an isolation procedure and suggest a next action
///
/// Accepts the full document text plus an optional query (a procedure code
/// such as MEXIP01, or a free-text error description), and returns the parsed
/// procedure with a rule-based action suggestion. Lookup failures are normal
/// outcomes reported in the response body, never HTTP errors; malformed JSON
/// is rejected by the extractor before the core runs.
#[axum::debug_handler]
async fn search_isolation_procedure(
    State(state): State<AppState>,
    Json(req): Json<SearchReq>,
) -> Json<SearchRes> {
    Json(state.search_service.search(&req.text, req.query.as_deref()))
}
