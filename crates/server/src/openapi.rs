use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDoc {
    pub id: i32,
    pub model: String,
    pub company: String,
    pub daily_rate: f64,
    pub image_url: Option<String>,
    pub available: bool,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
}

/// `id` must be absent on create and is ignored on replace; `available` defaults to true.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarInputDoc {
    pub id: Option<i32>,
    pub model: String,
    pub company: String,
    pub daily_rate: f64,
    pub image_url: Option<String>,
    pub available: Option<bool>,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
}

/// `fullName` and `phoneNumber` are accepted as aliases of `name` and `phone`.
#[derive(Serialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(Serialize, ToSchema)]
pub struct UserDoc {
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cars::list,
        crate::routes::cars::available,
        crate::routes::cars::get,
        crate::routes::cars::create,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::cars::filter,
        crate::routes::auth::register,
        crate::routes::auth::login,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CarDoc,
            CarInputDoc,
            RegisterRequest,
            LoginRequest,
            UserDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars"),
        (name = "users")
    )
)]
pub struct ApiDoc;
