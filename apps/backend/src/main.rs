use actix_web::{web, App, HttpServer};
use dictation_backend::config::server::ServerConfig;
use dictation_backend::infra::state::build_state;
use dictation_backend::middleware::cors::cors_middleware;
use dictation_backend::middleware::request_trace::RequestTrace;
use dictation_backend::middleware::structured_logger::StructuredLogger;
use dictation_backend::middleware::trace_span::TraceSpan;
use dictation_backend::telemetry::{self, LogFormat};
use dictation_backend::routes;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing(LogFormat::from_env());

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let origins = config.cors_allowed_origins.clone();
    info!(%host, port, upload_max_bytes = config.upload_max_bytes, "Starting Dictation Champ backend");

    let data = web::Data::new(build_state().with_config(config).build());

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
