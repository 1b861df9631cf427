use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use derive_more::Display;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Display, ToSchema)]
pub enum Status {
    Ok,
    Err,
}

pub trait AsStatusCode {
    fn as_status_code(&self) -> StatusCode;
}

pub trait IntoApiResponse {
    fn into_api_response(self) -> axum::response::Response;
}

#[derive(ToSchema, Serialize)]
pub struct Data<T> {
    status: Status,
    data: T,
}

impl<T> Data<T>
where
    T: Serialize,
{
    pub const fn new(data: T) -> Self {
        Self {
            status: Status::Ok,
            data,
        }
    }
}

impl<T> From<T> for Data<T>
where
    T: Serialize,
{
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T> IntoResponse for Data<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(ToSchema, Serialize)]
pub struct Error {
    status: Status,
    message: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl Error {
    pub fn new(message: impl Display, status_code: StatusCode) -> Self {
        Self {
            status: Status::Err,
            message: message.to_string(),
            status_code,
        }
    }

    pub fn not_found() -> Self {
        Self::new("Not found", StatusCode::NOT_FOUND)
    }

    pub fn from_api_error<T>(err: &T) -> Self
    where
        T: AsStatusCode + Display,
    {
        Self::new(err, err.as_status_code())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}
