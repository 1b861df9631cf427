use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use maud::Markup;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::extractor::Viewer;
use super::page;
use super::state::{self, ArcAppState};
use crate::domain::profile::ProfileView;
use crate::infra::error::Error;
use crate::presentation::api_response::{self, Data};

const TAG: &str = "User";

pub fn router() -> OpenApiRouter<ArcAppState> {
    OpenApiRouter::new()
        .routes(routes!(profile_data))
        .route("/profile/{username}", get(profile_page))
}

super::data! {
    DataProfileView, ProfileView
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/api/profile/{username}",
    params(
        ("username" = String, Path),
        ("x-viewer-id" = Option<String>, Header,
            description = "Viewer id forwarded by the identity provider. \
                The header name is set by `identity.viewer_header`, \
                `x-viewer-id` is the default"),
    ),
    responses(
        (status = 200, body = DataProfileView),
        (status = 404, body = api_response::Error),
        (status = 500, body = api_response::Error),
    ),
)]
async fn profile_data(
    viewer: Viewer,
    State(service): State<state::UserProfileService>,
    Path(username): Path<String>,
) -> Result<Data<ProfileView>, Response> {
    visible_profile(&service, &username, &viewer)
        .await
        .map_err(IntoResponse::into_response)?
        .map(Data::from)
        .ok_or_else(|| api_response::Error::not_found().into_response())
}

async fn profile_page(
    viewer: Viewer,
    State(service): State<state::UserProfileService>,
    Path(username): Path<String>,
) -> Result<Markup, Response> {
    let view = visible_profile(&service, &username, &viewer)
        .await
        .map_err(|e| {
            e.print();
            (StatusCode::INTERNAL_SERVER_ERROR, page::internal_error())
                .into_response()
        })?;

    view.map(|view| page::profile(&view)).ok_or_else(|| {
        (StatusCode::NOT_FOUND, page::not_found()).into_response()
    })
}

async fn visible_profile(
    service: &state::UserProfileService,
    username: &str,
    viewer: &Viewer,
) -> Result<Option<ProfileView>, Error> {
    Ok(service
        .view(username, viewer.id())
        .await?
        .into_visible()
        .map(ProfileView::from))
}
