use axum::http::StatusCode;
use std::fmt;
use tracing::debug;

/// A rejected request. Rendered as a plain-text body with its status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn invalid_day(raw: &str) -> Self {
        Self::bad_request(format!("day must be a YYYY-MM-DD date, got {raw:?}"))
    }

    pub fn invalid_month(year: i32, month: u32) -> Self {
        Self::bad_request(format!("no such month: year {year}, month {month} (expected 1-12)"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        debug!("rejecting request: {self}");
        (self.status, self.message).into_response()
    }
}
