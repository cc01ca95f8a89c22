use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive session id taken from the `{id}` path segment.
///
/// Existence is checked by the handler, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub i64);

impl SessionId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidSessionId,
                format!("Invalid game session id: {raw}"),
            )
        })?;
        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidSessionId,
                format!("Game session id must be positive, got: {id}"),
            ));
        }
        Ok(SessionId(id))
    }
}

impl FromRequest for SessionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => SessionId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidSessionId,
                "Missing id parameter",
            )),
        };
        ready(result)
    }
}
