//! JSON body extractor with the service's error contract.
//!
//! actix's own `Json` answers malformed bodies with plain text; here every
//! failure is an `AppError`, so clients always get the `error` field.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Largest JSON body accepted; a full ten-round summary is a few KiB.
pub const JSON_BODY_LIMIT: usize = 256 * 1024;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // actix's default PayloadConfig limit matches JSON_BODY_LIMIT; a
        // route-level config may raise it, the length check below may not.
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await.map_err(|e| {
                if e.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::payload_too_large(format!(
                        "JSON body exceeds {JSON_BODY_LIMIT} bytes"
                    ))
                } else {
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                }
            })?;
            if body.len() > JSON_BODY_LIMIT {
                return Err(AppError::payload_too_large(format!(
                    "JSON body exceeds {JSON_BODY_LIMIT} bytes"
                )));
            }

            serde_json::from_slice::<T>(&body)
                .map(ValidatedJson)
                .map_err(|e| {
                    debug!(error = %e, body_bytes = body.len(), "Rejected JSON body");
                    AppError::invalid(ErrorCode::ValidationError, describe(&e))
                })
        })
    }
}

/// Client-facing message for a serde_json failure.
fn describe(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: body ended early".to_owned(),
        Category::Data => format!("Invalid game session data: {error}"),
        Category::Io => "Invalid JSON: body could not be read".to_owned(),
    }
}
