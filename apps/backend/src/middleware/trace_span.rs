//! Span per request.
//!
//! Events logged by handlers, services and the session store inherit the
//! request id, method and matched route. The response status is recorded on
//! the span once the inner service finishes. Register inside `RequestTrace`.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{field, info_span, Instrument};

use crate::middleware::request_trace::request_id_of;

#[derive(Clone, Copy, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, inner: S) -> Self::Future {
        ready(Ok(TraceSpanService { inner }))
    }
}

pub struct TraceSpanService<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Unmatched paths (404s, scanners) are logged verbatim.
        let route = req.match_pattern().unwrap_or_else(|| req.path().to_owned());
        let span = info_span!(
            "http_request",
            request_id = %request_id_of(&req),
            method = %req.method(),
            route = %route,
            status = field::Empty,
        );

        let pending = span.in_scope(|| self.inner.call(req));
        Box::pin(async move {
            let result = pending.instrument(span.clone()).await;
            if let Ok(res) = &result {
                span.record("status", res.status().as_u16());
            }
            result
        })
    }
}
