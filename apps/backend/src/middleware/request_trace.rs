//! Request id assignment.
//!
//! Callers may send their own uuid in `x-request-id` to correlate logs across
//! services; anything else is replaced with a fresh v4 id. The id
//! is stored in request extensions for the inner middleware, installed as the
//! task-local trace id for the handler, and echoed on the response.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn from_header(value: Option<&HeaderValue>) -> Self {
        let supplied = value
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok());
        Self(supplied.unwrap_or_else(Uuid::new_v4).hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Id assigned by `RequestTrace`, or `unknown` when it is not installed.
pub fn request_id_of(req: &ServiceRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_owned())
        .unwrap_or_else(|| trace_ctx::UNKNOWN_TRACE_ID.to_owned())
}

/// Outermost wrap; see the module docs.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, inner: S) -> Self::Future {
        ready(Ok(RequestTraceService { inner }))
    }
}

pub struct RequestTraceService<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = RequestId::from_header(req.headers().get(REQUEST_ID_HEADER));
        req.extensions_mut().insert(id.clone());
        let pending = self.inner.call(req);

        Box::pin(async move {
            let mut res = trace_ctx::with_trace_id(id.as_str().to_owned(), pending).await?;
            if let Ok(value) = HeaderValue::from_str(id.as_str()) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
