//! One `request_completed` event per request.

use std::time::Instant;

use actix_web::body::{BodySize, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Level;

use crate::middleware::request_trace::request_id_of;

/// Liveness endpoints polled by load balancers.
const PROBE_PATHS: [&str; 2] = ["/", "/health"];

/// Server errors at error, client errors at warn. Successful liveness probes
/// drop to debug so they do not drown out game traffic.
pub fn completion_level(path: &str, status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else if PROBE_PATHS.contains(&path) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

macro_rules! at_level {
    ($level:expr, $($fields:tt)+) => {{
        let level = $level;
        if level == Level::ERROR {
            tracing::error!($($fields)+)
        } else if level == Level::WARN {
            tracing::warn!($($fields)+)
        } else if level == Level::INFO {
            tracing::info!($($fields)+)
        } else {
            tracing::debug!($($fields)+)
        }
    }};
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, inner: S) -> Self::Future {
        ready(Ok(StructuredLoggerService { inner }))
    }
}

pub struct StructuredLoggerService<S> {
    inner: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let request_id = request_id_of(&req);
        let pending = self.inner.call(req);

        Box::pin(async move {
            let result = pending.await;
            let (status, response_bytes) = match &result {
                Ok(res) => {
                    let bytes = match res.response().body().size() {
                        BodySize::Sized(n) => n,
                        BodySize::None | BodySize::Stream => 0,
                    };
                    (res.status(), bytes)
                }
                Err(err) => (err.as_response_error().status_code(), 0),
            };
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            at_level!(
                completion_level(&path, status),
                %method,
                %path,
                status = status.as_u16(),
                response_bytes,
                elapsed_ms,
                %request_id,
                "request_completed"
            );
            result
        })
    }
}
