//! Error responses of the HTTP API.
//!
//! Every failure is answered with a JSON body of the form
//! `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

use matelas::MatelasError;

/// Message returned for bodies that are not a usable JSON object.
const INVALID_INPUT: &str = "Invalid input data";

/// Failures of an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not accepted as JSON.
    #[error("{0}")]
    Rejected(#[from] JsonRejection),

    /// The request was parsed but resolving or computing the layout failed.
    #[error("{0}")]
    Service(#[from] MatelasError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// HTTP status and caller-facing message of this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Rejected(JsonRejection::MissingJsonContentType(rejection)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, rejection.body_text())
            }
            Self::Rejected(rejection) if rejection.status().is_server_error() => {
                (rejection.status(), rejection.body_text())
            }
            Self::Rejected(_) => (StatusCode::BAD_REQUEST, INVALID_INPUT.to_string()),
            Self::Service(MatelasError::Input(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Service(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(status = status.as_u16(), err:% = self; "Request failed");
        } else {
            warn!(status = status.as_u16(), err:% = self; "Request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
