use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use tracing::info;

use models::car;
use service::car::domain::{CarFilter, CarInput};

use crate::{errors::JsonApiError, state::ServerState};

type CarList = Result<Json<Vec<car::Model>>, JsonApiError>;

#[utoipa::path(get, path = "/api/cars", tag = "cars", responses((status = 200, description = "All cars", body = [crate::openapi::CarDoc])))]
pub async fn list(State(state): State<ServerState>) -> CarList {
    let cars = state.cars.list_all().await?;
    info!(count = cars.len(), "list cars");
    Ok(Json(cars))
}

#[utoipa::path(get, path = "/api/cars/available", tag = "cars", responses((status = 200, description = "Cars whose availability flag is set", body = [crate::openapi::CarDoc])))]
pub async fn available(State(state): State<ServerState>) -> CarList {
    Ok(Json(state.cars.list_available().await?))
}

#[utoipa::path(
    get, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<car::Model>, JsonApiError> {
    state
        .cars
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("car not found"))
}

#[utoipa::path(
    post, path = "/api/cars", tag = "cars",
    request_body = crate::openapi::CarInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Payload carried an id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CarInput>) -> Result<Json<car::Model>, JsonApiError> {
    Ok(Json(state.cars.create(input).await?))
}

#[utoipa::path(
    put, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car id")),
    request_body = crate::openapi::CarInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Json(input): Json<CarInput>) -> Result<Json<car::Model>, JsonApiError> {
    Ok(Json(state.cars.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.cars.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/cars/filters", tag = "cars",
    params(
        ("type" = Option<String>, Query, description = "Exact car type; wins over the price bounds"),
        ("minPrice" = Option<f64>, Query, description = "Inclusive lower daily rate"),
        ("maxPrice" = Option<f64>, Query, description = "Inclusive upper daily rate")
    ),
    responses((status = 200, description = "Matching cars", body = [crate::openapi::CarDoc]))
)]
pub async fn filter(State(state): State<ServerState>, Query(filter): Query<CarFilter>) -> CarList {
    Ok(Json(state.cars.filter(&filter).await?))
}
