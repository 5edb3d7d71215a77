//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure reaches the client as `{"error": "<message>"}`; missing
//! parameters also list the absent names under `"fields"`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::service::ServiceError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("missing required fields: {}", .0.join(", "))]
  MissingFields(Vec<&'static str>),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  /// The cause is logged but never sent to the client.
  #[error("{message}")]
  Internal {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Translate a service failure; `operation` is the client-facing message
  /// used if the failure turns out to be internal.
  pub fn from_service(err: ServiceError, operation: &'static str) -> Self {
    match err {
      ServiceError::NotFound(m) => Self::NotFound(m),
      ServiceError::Store(source) => Self::Internal { message: operation, source },
      invalid => Self::BadRequest(invalid.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::MissingFields(fields) => {
        let message = format!("Missing required fields: {}", fields.join(", "));
        (
          StatusCode::BAD_REQUEST,
          Json(json!({ "error": message, "fields": fields })),
        )
          .into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Internal { message, source } => {
        tracing::error!(error = %source, "{message}");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message })))
          .into_response()
      }
    }
  }
}

/// Fail with [`ApiError::MissingFields`] naming every blank parameter.
///
/// Path parameters are never absent once a route matches, so blank or
/// whitespace-only values count as missing.
pub fn require<const N: usize>(params: [(&'static str, &str); N]) -> Result<(), ApiError> {
  let missing: Vec<&'static str> = params
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| *name)
    .collect();

  if missing.is_empty() {
    Ok(())
  } else {
    Err(ApiError::MissingFields(missing))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn require_lists_only_blank_params() {
    assert!(require([("year", "2022"), ("orgId", "org1")]).is_ok());

    let err = require([("year", "2022"), ("orgId", "  "), ("field", "")]).unwrap_err();
    assert!(matches!(err, ApiError::MissingFields(f) if f == ["orgId", "field"]));
  }

  #[test]
  fn internal_errors_map_to_500() {
    let err = ApiError::Internal {
      message: "Unable to retrieve program outcomes",
      source:  "disk on fire".into(),
    };
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
