use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use courses_core::CoursesCore;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok")
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns version information of the running service.",
)]
pub(crate) async fn get_build_info() -> Json<Value> {
    let core = CoursesCore::version();

    Json::from(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "core": {
            "name": core.name,
            "version": core.version,
        },
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
