pub mod auth;
pub mod cars;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{openapi::ApiDoc, state::ServerState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse), (status = 503, description = "Database unreachable", body = crate::openapi::HealthResponse)))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    if models::db::ping(&state.db).await {
        (StatusCode::OK, Json(Health::ok()))
    } else {
        warn!("health check: database ping failed");
        (StatusCode::SERVICE_UNAVAILABLE, Json(Health::degraded()))
    }
}

/// Build the full application router: health, car CRUD, user registration/login and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let car_routes = Router::new()
        .route("/api/cars", get(cars::list).post(cars::create))
        .route("/api/cars/available", get(cars::available))
        .route("/api/cars/filters", get(cars::filter))
        .route("/api/cars/:id", get(cars::get).put(cars::update).delete(cars::delete));

    let user_routes = Router::new()
        .route("/registerUser", post(auth::register))
        .route("/loginUser", post(auth::login));

    Router::new()
        .route("/health", get(health))
        .merge(car_routes)
        .merge(user_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // Status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
