use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::HeaderName;
use axum::http::request::Parts;

use crate::domain::user::UserId;

/// Name of the header the identity provider forwards the viewer id in
#[derive(Clone, Debug)]
pub struct ViewerHeader(pub HeaderName);

/// The signed-in viewer, `None` for anonymous requests.
///
/// A missing, empty or non-UTF-8 header is anonymous, never a rejection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewer(pub Option<UserId>);

impl Viewer {
    pub const fn id(&self) -> Option<&UserId> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
    ViewerHeader: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let ViewerHeader(header) = ViewerHeader::from_ref(state);

        let viewer = parts
            .headers
            .get(&header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(UserId::from);

        Ok(Self(viewer))
    }
}
