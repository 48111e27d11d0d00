use axum::{extract::State, Json};

use service::auth::domain::{AuthUser, LoginInput, RegisterInput};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/registerUser", tag = "users",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = crate::openapi::UserDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Conflict", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn register(State(state): State<ServerState>, Json(input): Json<RegisterInput>) -> Result<Json<AuthUser>, JsonApiError> {
    Ok(Json(state.auth.register(input).await?))
}

#[utoipa::path(
    post, path = "/loginUser", tag = "users",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged In", body = crate::openapi::UserDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown username", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn login(State(state): State<ServerState>, Json(input): Json<LoginInput>) -> Result<Json<AuthUser>, JsonApiError> {
    Ok(Json(state.auth.login(input).await?))
}
