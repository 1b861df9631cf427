use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

use crate::constant::PUBLIC_DIR;
use crate::infra::state::AppState;
pub use extractor::{Viewer, ViewerHeader};
pub use state::ArcAppState;

mod extractor;
mod page;
mod state;
mod user;

#[derive(OpenApi)]
#[openapi(info(
    title = "Social profile",
    description = "Profile pages of the social network",
    license(name = "MIT", url = "https://opensource.org/licenses/MIT")
))]
struct ApiDoc;

pub async fn listen(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(ArcAppState::new(state));

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match signal::ctrl_c().await {
                Ok(()) => {}
                Err(err) => {
                    tracing::error!(
                        "Unable to listen for shutdown signal: {err}"
                    );
                }
            }
        })
        .await?;

    Ok(())
}

pub fn router(state: ArcAppState) -> Router {
    let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(user::router())
        .routes(routes!(health_check));

    let (router, api_doc) = api_router.split_for_parts();

    let doc_router = router
        .merge(Scalar::with_url("/docs", api_doc.clone()))
        .route("/openapi.json", get(async move || Json(api_doc)));

    Router::new()
        .merge(doc_router)
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health_check",
    responses(
        (status = 200)
    ),
)]
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

macro_rules! data {
	($($name:ident, $type:ty $(,)?)*) => {
        $(
            #[derive(utoipa::ToSchema)]
            #[allow(clippy::allow_attributes, dead_code)]
            struct $name {
                status: crate::presentation::api_response::Status,
                #[schema(
                    required = true,
                )]
                data: $type
            }
        ) *
	};
}
use data;
