use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::session_id::SessionId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::sessions::NewSession;
use crate::services::sessions;
use crate::state::app_state::AppState;

/// POST /api/game-sessions
async fn create_session(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewSession>,
) -> Result<HttpResponse, AppError> {
    let stored = sessions::create_session(app_state.sessions.as_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stored))
}

/// GET /api/game-sessions/{id}
async fn get_session(
    app_state: web::Data<AppState>,
    id: SessionId,
) -> Result<HttpResponse, AppError> {
    let stored = sessions::get_session(app_state.sessions.as_ref(), id.0).await?;
    Ok(HttpResponse::Ok().json(stored))
}

/// GET /api/game-sessions/{id}/export
async fn export_session(
    app_state: web::Data<AppState>,
    id: SessionId,
) -> Result<HttpResponse, AppError> {
    let export = sessions::export_session(app_state.sessions.as_ref(), id.0).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(export.file_name)],
        })
        .body(export.csv))
}

/// GET /api/game-sessions/{id}/report
async fn session_report(
    app_state: web::Data<AppState>,
    id: SessionId,
) -> Result<HttpResponse, AppError> {
    let report = sessions::session_report(app_state.sessions.as_ref(), id.0).await?;
    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_session))
        .route("/{id}", web::get().to(get_session))
        .route("/{id}/export", web::get().to(export_session))
        .route("/{id}/report", web::get().to(session_report));
}
