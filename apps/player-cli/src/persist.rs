//! Saving finished sessions to a running backend.

use dictation_backend::domain::SessionSummary;
use dictation_backend::StoredSession;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::CliError;

/// Endpoint for session creation under `server`.
pub fn sessions_url(server: &str) -> String {
    format!("{}/api/game-sessions", server.trim_end_matches('/'))
}

/// POST the summary and return the stored id.
pub async fn save_session(
    client: &reqwest::Client,
    server: &str,
    summary: &SessionSummary,
) -> Result<i64, CliError> {
    let url = sessions_url(server);
    let resp = client.post(&url).json(summary).send().await?;
    let status = resp.status();

    if !status.is_success() {
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unexpected response")
            .to_string();
        return Err(CliError::ServerRejected {
            status: status.as_u16(),
            message,
        });
    }

    let stored: StoredSession = resp.json().await?;
    info!(id = stored.id, %url, "Session saved");
    Ok(stored.id)
}

/// Persistence never interrupts the results screen; failures are logged.
pub async fn save_best_effort(server: &str, summary: &SessionSummary) -> Option<i64> {
    let client = reqwest::Client::new();
    match save_session(&client, server, summary).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(error = %e, server, "Could not save game session");
            None
        }
    }
}
