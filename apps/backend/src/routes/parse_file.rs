use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::word_source;
use crate::state::app_state::AppState;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
struct ParseFileResponse {
    words: Vec<String>,
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/parse-file
async fn parse_file(
    mut payload: Multipart,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let limit = app_state.upload_max_bytes();
    let mut upload: Option<Upload> = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;

        // Only the first `file` field counts; anything else is drained.
        if field.name() != Some(UPLOAD_FIELD) || upload.is_some() {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let mut bytes = BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > limit {
                return Err(AppError::payload_too_large(format!(
                    "Upload exceeds {limit} bytes"
                )));
            }
            bytes.extend_from_slice(&chunk);
        }
        upload = Some(Upload {
            file_name,
            bytes: bytes.freeze(),
        });
    }

    let Some(upload) = upload else {
        return Err(DomainError::validation(ValidationKind::EmptyUpload, "No file uploaded").into());
    };

    let bank = word_source::parse_upload(&upload.file_name, &upload.bytes)?;
    info!(
        file_name = %upload.file_name,
        size = upload.bytes.len(),
        word_count = bank.len(),
        "Parsed word file"
    );

    Ok(HttpResponse::Ok().json(ParseFileResponse {
        words: bank.words().iter().map(|w| w.to_string()).collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/parse-file", web::post().to(parse_file));
}
