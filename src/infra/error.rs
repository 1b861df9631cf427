use std::borrow::Cow;
use std::error::Error as _;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use derive_more::{Display, From};
use sea_orm::DbErr;

use crate::presentation::api_response::{self, AsStatusCode, IntoApiResponse};

/// Note: Don't impl from for variants
#[derive(Debug, Display, From, derive_more::Error)]
pub enum Error {
    Internal(InternalError),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Error::Internal(InternalError::SeaOrm(value))
    }
}

impl Error {
    /// Log the cause, for callers that render their own response
    pub fn print(&self) {
        match self {
            Self::Internal(e) => e.print(),
        }
    }
}

impl AsStatusCode for Error {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::Internal(e) => e.as_status_code(),
        }
    }
}

impl IntoApiResponse for Error {
    fn into_api_response(self) -> axum::response::Response {
        match self {
            Self::Internal(e) => e.into_api_response(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        self.into_api_response()
    }
}

#[derive(Debug, Display, derive_more::Error, From)]
#[display("Internal Server Error")]
pub enum InternalError {
    SeaOrm(DbErr),
    Custom(#[error(not(source))] Cow<'static, str>),
}

impl InternalError {
    const fn prefix(&self) -> &'static str {
        match self {
            Self::SeaOrm(_) => "Database error",
            Self::Custom(_) => "Custom error",
        }
    }

    fn print(&self) {
        match self {
            Self::Custom(e) => tracing::error!("{}: {}", self.prefix(), e),
            _ => {
                if let Some(source) = self.source() {
                    tracing::error!("{}: {}", self.prefix(), source);
                } else {
                    tracing::error!("{}: {}", self.prefix(), self);
                }
            }
        }
    }
}

impl AsStatusCode for InternalError {
    fn as_status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoApiResponse for InternalError {
    fn into_api_response(self) -> axum::response::Response {
        self.print();
        api_response::Error::from_api_error(&self).into_response()
    }
}
