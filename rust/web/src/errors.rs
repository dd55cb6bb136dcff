//! Error responses for the HTTP API.
//!
//! Every failure leaves the server as an [`ErrorResponse`] body with a
//! machine-readable `error` code and a human-readable `message`.

use botnaught_ai::DecisionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::{Rejection, Reply};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g. "invalid_game_state")
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn into_response(self, status: StatusCode) -> Response {
        reply::with_status(reply::json(&self), status).into_response()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 4xx: the caller sent something we cannot act on
    Client,
    /// 5xx
    Server,
}

/// Maps an error onto a status code and [`ErrorResponse`], logging it on the
/// way out.
pub trait IntoErrorResponse {
    fn status_code(&self) -> StatusCode;

    fn error_code(&self) -> &'static str;

    fn error_message(&self) -> String;

    fn severity(&self) -> ErrorSeverity {
        if self.status_code().is_server_error() {
            ErrorSeverity::Server
        } else {
            ErrorSeverity::Client
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.error_message())
    }

    fn into_http_response(self) -> Response
    where
        Self: Sized,
    {
        let status = self.status_code();
        let body = self.to_error_response();

        match self.severity() {
            ErrorSeverity::Client => tracing::warn!(
                status = status.as_u16(),
                error = %body.error,
                message = %body.message,
                "client error"
            ),
            ErrorSeverity::Server => tracing::error!(
                status = status.as_u16(),
                error = %body.error,
                message = %body.message,
                "server error"
            ),
        }

        body.into_response(status)
    }
}

impl IntoErrorResponse for DecisionError {
    fn status_code(&self) -> StatusCode {
        match self {
            DecisionError::InvalidGameState(_) => StatusCode::BAD_REQUEST,
            DecisionError::UnknownStrategy(_) | DecisionError::InvalidConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DecisionError::InvalidGameState(_) => "invalid_game_state",
            DecisionError::UnknownStrategy(_) => "unknown_strategy",
            DecisionError::InvalidConfig(_) => "invalid_config",
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }
}

/// Failures raised by the routing layer before a handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    MethodNotAllowed,
    InvalidRequest(String),
    LengthRequired,
    PayloadTooLarge,
    UnsupportedMediaType,
    Internal(String),
}

impl IntoErrorResponse for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::LengthRequired => StatusCode::LENGTH_REQUIRED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound => "not_found",
            ApiError::MethodNotAllowed => "method_not_allowed",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::LengthRequired => "length_required",
            ApiError::PayloadTooLarge => "payload_too_large",
            ApiError::UnsupportedMediaType => "unsupported_media_type",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn error_message(&self) -> String {
        match self {
            ApiError::NotFound => "no such route".into(),
            ApiError::MethodNotAllowed => "method not allowed on this route".into(),
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::LengthRequired => "request body needs a content-length".into(),
            ApiError::PayloadTooLarge => "request body too large".into(),
            ApiError::UnsupportedMediaType => "request body must be JSON".into(),
            ApiError::Internal(msg) => msg.clone(),
        }
    }
}

impl From<&Rejection> for ApiError {
    fn from(err: &Rejection) -> Self {
        if err.is_not_found() {
            ApiError::NotFound
        } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
            ApiError::InvalidRequest(e.to_string())
        } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
            ApiError::MethodNotAllowed
        } else if err.find::<warp::reject::LengthRequired>().is_some() {
            ApiError::LengthRequired
        } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
            ApiError::PayloadTooLarge
        } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
            ApiError::UnsupportedMediaType
        } else {
            ApiError::Internal(format!("unhandled rejection: {err:?}"))
        }
    }
}

/// Turns every warp rejection into a JSON error body.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Rejection> {
    Ok(ApiError::from(&err).into_http_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serialization() {
        let error = ErrorResponse::new("invalid_game_state", "no player holds hole cards");
        let json = serde_json::to_value(&error).expect("serialize");

        assert_eq!(json["error"], "invalid_game_state");
        assert_eq!(json["message"], "no player holds hole cards");
        assert_eq!(json.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn error_response_display() {
        let error = ErrorResponse::new("not_found", "no such route");
        assert_eq!(error.to_string(), "not_found: no such route");
    }

    #[test]
    fn decision_errors_map_to_status() {
        let err = DecisionError::InvalidGameState("bad board".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.severity(), ErrorSeverity::Client);
        let body = err.to_error_response();
        assert_eq!(body.error, "invalid_game_state");
        assert_eq!(body.message, "Invalid game state: bad board");

        let err = DecisionError::UnknownStrategy("gto".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.severity(), ErrorSeverity::Server);
    }

    #[test]
    fn not_found_rejection_maps_to_404() {
        let api = ApiError::from(&warp::reject::not_found());
        assert_eq!(api, ApiError::NotFound);
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
    }
}
