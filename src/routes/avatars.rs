use axum::{
    extract::{Path, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use url::Url;
use utoipa::{IntoParams, OpenApi};
use validator::Validate;

use crate::{
    app::{
        error::{AppError, InputErrorResponse},
        extractor::ValidatedQuery,
        ApiContext,
    },
    avatar::{generate, render_svg, AvatarDescriptor, AvatarSource, Palette, RenderOptions},
    routes::docs::AVATAR_TAG,
};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(OpenApi)]
#[openapi(
    paths(resolve_avatar, render_avatar, describe_avatar),
    components(schemas(AvatarDescriptor, InputErrorResponse))
)]
pub struct AvatarApi;

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvatarQuery {
    /// Comma separated `#RRGGBB` colors, replaces the configured palette.
    colors: Option<String>,
    /// Width and height in pixels.
    #[validate(range(min = 1, max = 1024))]
    size: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    name: String,
    /// Uploaded picture, preferred over the generated avatar when present.
    /// Blank counts as absent. Only http and https are followed.
    avatar_url: Option<String>,
    colors: Option<String>,
    #[validate(range(min = 1, max = 1024))]
    size: Option<u32>,
}

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/avatars", get(resolve_avatar))
        .route("/avatars/:name", get(render_avatar))
        .route("/avatars/:name/descriptor", get(describe_avatar))
}

#[utoipa::path(
    get,
    path = "",
    tag = AVATAR_TAG,
    params(ResolveQuery),
    responses(
        (status = 200, description = "Generated avatar", content_type = "image/svg+xml", body = String),
        (status = 307, description = "Redirect to the uploaded picture"),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Invalid input", body = InputErrorResponse)
    )
)]
#[tracing::instrument(name = "Resolve avatar", skip_all, fields(name = %query.name))]
async fn resolve_avatar(
    ctx: State<ApiContext>,
    ValidatedQuery(query): ValidatedQuery<ResolveQuery>,
) -> Result<Response, AppError> {
    match AvatarSource::resolve(&query.name, query.avatar_url.as_deref()) {
        AvatarSource::Image(url) => {
            let location = redirect_target(&url)?;
            Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response())
        }
        AvatarSource::Generated(name) => {
            let options = AvatarQuery {
                colors: query.colors,
                size: query.size,
            };
            svg_response(&ctx, &name, &options)
        }
    }
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = AVATAR_TAG,
    params(
        ("name" = String, Path, description = "Display name the avatar is derived from"),
        AvatarQuery
    ),
    responses(
        (status = 200, description = "Generated avatar", content_type = "image/svg+xml", body = String),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Invalid input", body = InputErrorResponse)
    )
)]
#[tracing::instrument(name = "Render avatar", skip_all, fields(name = %name))]
async fn render_avatar(
    ctx: State<ApiContext>,
    Path(name): Path<String>,
    ValidatedQuery(query): ValidatedQuery<AvatarQuery>,
) -> Result<Response, AppError> {
    svg_response(&ctx, &name, &query)
}

#[utoipa::path(
    get,
    path = "/{name}/descriptor",
    tag = AVATAR_TAG,
    params(
        ("name" = String, Path, description = "Display name the avatar is derived from"),
        AvatarQuery
    ),
    responses(
        (status = 200, description = "Avatar parameters", body = AvatarDescriptor),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Invalid input", body = InputErrorResponse)
    )
)]
#[tracing::instrument(name = "Describe avatar", skip_all, fields(name = %name))]
async fn describe_avatar(
    ctx: State<ApiContext>,
    Path(name): Path<String>,
    ValidatedQuery(query): ValidatedQuery<AvatarQuery>,
) -> Result<Response, AppError> {
    let palette = query.palette(&ctx.config.app_avatar_palette)?;
    let avatar = generate(&name, palette.colors())?;

    Ok(([(CACHE_CONTROL, cache_control(&ctx))], Json(avatar)).into_response())
}

impl AvatarQuery {
    fn palette(&self, fallback: &Palette) -> Result<Palette, AppError> {
        match self.colors.as_deref() {
            Some(colors) => Ok(colors.parse::<Palette>()?),
            None => Ok(fallback.clone()),
        }
    }
}

fn svg_response(ctx: &ApiContext, name: &str, query: &AvatarQuery) -> Result<Response, AppError> {
    let palette = query.palette(&ctx.config.app_avatar_palette)?;
    let avatar = generate(name, palette.colors())?;
    let svg = render_svg(&avatar, name, RenderOptions { size: query.size });

    tracing::debug!(
        wrapper_color = %avatar.wrapper_color,
        is_circle = avatar.is_circle,
        "rendered avatar"
    );

    Ok((
        [
            (CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
            (CACHE_CONTROL, cache_control(ctx)),
        ],
        svg,
    )
        .into_response())
}

/// Parse `raw` as an absolute http(s) URL and turn its normalized form into a header.
fn redirect_target(raw: &str) -> Result<HeaderValue, AppError> {
    let invalid = || AppError::unprocessable_entity([("avatar_url", "url")]);

    let url = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        tracing::info!("Rejected avatar url scheme: {}", url.scheme());
        return Err(invalid());
    }

    HeaderValue::from_str(url.as_str()).map_err(|_| invalid())
}

fn cache_control(ctx: &ApiContext) -> String {
    format!("public, max-age={}", ctx.config.app_avatar_cache_max_age)
}
