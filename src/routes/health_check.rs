use axum::{http::StatusCode, routing::get, Router};

use crate::app::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/health_check", get(health_check))
}

#[utoipa::path(
    get,
    path = "/health_check",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
