//! Error responses for the JSON API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shelf_core::{LibraryError, ParseError, ShelfError};

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// A store or input error on its way to becoming an HTTP response
#[derive(Debug)]
pub struct ApiError(pub ShelfError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ShelfError::Parse(ParseError::InvalidBookId(_)) => StatusCode::BAD_REQUEST,
            ShelfError::Library(LibraryError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self.0 {
            ShelfError::Parse(_) => "invalid_id",
            ShelfError::Library(_) => "not_found",
        }
    }
}

impl From<ShelfError> for ApiError {
    fn from(err: ShelfError) -> Self {
        Self(err)
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self(err.into())
    }
}

impl From<LibraryError> for ApiError {
    fn from(err: LibraryError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, "API error: {}", self.0);
        let body = ErrorBody {
            code: self.code(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
