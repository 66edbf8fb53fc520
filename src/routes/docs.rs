use crate::app::ApiContext;
use crate::routes::{avatars::AvatarApi, health_check};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const AVATAR_TAG: &str = "avatar";

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

#[derive(OpenApi)]
#[openapi(
    paths(health_check::health_check),
    nest(
        (
            path = "/avatars", api = AvatarApi
        )
    ),
    tags(
        (name = "avatar", description = "Generated identity avatars")
    )
)]
struct Api;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(Api::openapi())
}
