//! HTTP responses: UTF-8 JSON bodies and the error mapping.

use std::any::Any;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use super::request::ErrorBody;
use crate::error::{INTERNAL_ERROR_MESSAGE, InfographicError};

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// JSON response with an explicit `charset=utf-8` content type.
pub struct JsonUtf8<T>(pub T);

impl<T: Serialize> IntoResponse for JsonUtf8<T> {
    fn into_response(self) -> Response {
        json_response(StatusCode::OK, &self.0)
    }
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => {
            let mut response = (status, body).into_response();
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
            response
        }
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            internal_error_response()
        }
    }
}

fn internal_error_response() -> Response {
    let body = format!(r#"{{"error":"{INTERNAL_ERROR_MESSAGE}"}}"#);
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    response
}

impl IntoResponse for InfographicError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.is_client_error() {
            warn!(error = %self, "rejected analysis request");
        } else {
            error!(error = %self, "analysis failed");
        }
        json_response(status, &ErrorBody::from(&self))
    }
}

/// Turn a panic inside a handler into the fixed internal-error response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");
    internal_error_response()
}
