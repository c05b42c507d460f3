//! Server data structures.

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error_handling::ServerError;
use crate::fetch::{CheckOutcome, HstsChecker};
use crate::hsts::HstsVerdict;

/// Shared state for the HTTP endpoint
#[derive(Clone)]
pub struct AppState {
    pub checker: HstsChecker,
    pub cors_origin: Arc<HeaderValue>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `ServerError::InvalidCorsOrigin` if `cors_origin` cannot be
    /// sent as a header value.
    pub fn new(checker: HstsChecker, cors_origin: &str) -> Result<Self, ServerError> {
        let cors_origin = HeaderValue::from_str(cors_origin)
            .map_err(|_| ServerError::InvalidCorsOrigin(cors_origin.to_string()))?;
        Ok(Self {
            checker,
            cors_origin: Arc::new(cors_origin),
        })
    }
}

/// JSON body for a completed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictBody {
    pub message: String,
    pub compatible: bool,
    #[serde(rename = "hstsHeader", skip_serializing_if = "Option::is_none")]
    pub hsts_header: Option<String>,
}

/// JSON body for a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Either response body. Serialized without a tag so the wire shape is the
/// bare object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Verdict(VerdictBody),
    Error(ErrorBody),
}

/// A status code and JSON body, independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error(ErrorBody {
                error: message.into(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Serializes the body.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_else(|_| "{}".to_string())
    }

    /// Converts into an axum response carrying the CORS origin header.
    pub fn into_http(self, cors_origin: &HeaderValue) -> Response {
        let json = self.to_json();
        (
            self.status,
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                ),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, cors_origin.clone()),
            ],
            json,
        )
            .into_response()
    }
}

impl From<HstsVerdict> for ApiResponse {
    fn from(verdict: HstsVerdict) -> Self {
        Self {
            status: StatusCode::OK,
            body: ResponseBody::Verdict(VerdictBody {
                message: verdict.message().to_string(),
                compatible: verdict.is_compatible(),
                hsts_header: verdict.header().map(str::to_string),
            }),
        }
    }
}

impl From<CheckOutcome> for ApiResponse {
    fn from(outcome: CheckOutcome) -> Self {
        match outcome {
            CheckOutcome::Verdict(verdict) => verdict.into(),
            CheckOutcome::TransportError(message) => {
                ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsts::IncompatibleReason;

    #[test]
    fn test_incompatible_body_shape() {
        let response: ApiResponse =
            HstsVerdict::Incompatible(IncompatibleReason::MissingHeader).into();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.to_json(),
            r#"{"message":"Site does not serve any HSTS headers.","compatible":false}"#
        );
    }

    #[test]
    fn test_compatible_body_shape() {
        let response: ApiResponse = HstsVerdict::Compatible {
            header: "max-age=63072000; includeSubDomains; preload".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.to_json(),
            r#"{"message":"Site is compatible with the HSTS preload list!","compatible":true,"hstsHeader":"max-age=63072000; includeSubDomains; preload"}"#
        );
    }

    #[test]
    fn test_transport_error_body_shape() {
        let response: ApiResponse =
            CheckOutcome::TransportError("Error making request: boom".to_string()).into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.to_json(), r#"{"error":"Error making request: boom"}"#);
        assert!(!response.to_json().contains("compatible"));
    }

    #[test]
    fn test_into_http_sets_headers() {
        let response = ApiResponse::error(StatusCode::BAD_REQUEST, "No URL specified")
            .into_http(&HeaderValue::from_static("https://example.com"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("https://example.com"))
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json; charset=utf-8"))
        );
    }

    #[test]
    fn test_app_state_rejects_bad_origin() {
        let checker =
            HstsChecker::new(&crate::config::Config::default()).expect("client should build");
        assert!(AppState::new(checker.clone(), "*").is_ok());
        assert!(matches!(
            AppState::new(checker, "bad\norigin"),
            Err(ServerError::InvalidCorsOrigin(_))
        ));
    }
}
