//! In-process app with the production middleware order and a chosen route set.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use dictation_backend::middleware::request_trace::RequestTrace;
use dictation_backend::middleware::structured_logger::StructuredLogger;
use dictation_backend::middleware::trace_span::TraceSpan;
use dictation_backend::routes;
use dictation_backend::state::app_state::AppState;

type ConfigureFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

enum RouteSet {
    Empty,
    Production,
    Custom(ConfigureFn),
}

impl RouteSet {
    fn apply(&self, cfg: &mut web::ServiceConfig) {
        match self {
            RouteSet::Empty => {}
            RouteSet::Production => routes::configure(cfg),
            RouteSet::Custom(configure) => configure(cfg),
        }
    }
}

pub struct TestAppBuilder {
    state: AppState,
    routes: RouteSet,
}

impl TestAppBuilder {
    /// The routes `main.rs` serves.
    pub fn with_prod_routes(self) -> Self {
        Self {
            routes: RouteSet::Production,
            ..self
        }
    }

    /// Ad-hoc routes, e.g. handlers that fail with a chosen error.
    pub fn with_routes<F>(self, configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        Self {
            routes: RouteSet::Custom(Box::new(configure)),
            ..self
        }
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let Self { state, routes } = self;
        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(web::Data::new(state))
                .configure(move |cfg| routes.apply(cfg)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        routes: RouteSet::Empty,
    }
}
