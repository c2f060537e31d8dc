//! Activity log retrieval and clearing.
//!
//! The log store persists one record per backend operation; the console
//! reads the list wholesale and can ask the store to drop everything.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::{AppError, AppResult, LogEntry, FUNCTIONS_BASE};

/// Error body the log endpoints return on failure.
#[derive(Debug, Clone, Deserialize)]
struct LogErrorBody {
    error: Option<String>,
}

/// Map a non-success log endpoint response onto an [`AppError`].
///
/// Bodies are `{"error": "..."}` when the store produced them; anything
/// else is carried through verbatim.
fn api_error(status: u16, body: &str) -> AppError {
    let detail = serde_json::from_str::<LogErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| body.to_string());
    AppError::Api(format!("({}) {}", status, detail))
}

/// Fetch the full activity log, newest entries last.
pub async fn fetch_logs() -> AppResult<Vec<LogEntry>> {
    let url = format!("{}/logs", FUNCTIONS_BASE);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("log request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(api_error(response.status(), &error_text));
    }

    response
        .json::<Vec<LogEntry>>()
        .await
        .map_err(|e| AppError::Decode(format!("bad log payload: {}", e)))
}

/// Ask the log store to drop every record.
pub async fn clear_logs() -> AppResult<()> {
    let url = format!("{}/clearLogs", FUNCTIONS_BASE);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("clear request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(api_error(response.status(), &error_text));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogStatus;

    #[test]
    fn test_log_entry_deserialization() {
        let json = r#"[
            {
                "_id": "log-1",
                "createdDate": "2026-03-14T09:26:53.000Z",
                "status": "SUCCESS",
                "message": "Imported jane@example.com",
                "context": "importUsers"
            },
            {
                "_id": "log-2",
                "createdDate": "2026-03-14T09:26:54.000Z",
                "status": "ERROR",
                "message": "Import failed"
            }
        ]"#;

        let entries: Vec<LogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "log-1");
        assert_eq!(entries[0].status, LogStatus::Success);
        assert_eq!(entries[0].context.as_deref(), Some("importUsers"));
        assert_eq!(entries[1].status, LogStatus::Error);
        assert_eq!(entries[1].context, None);
    }

    #[test]
    fn test_unknown_status_decodes_as_info() {
        let json = r#"{
            "_id": "log-3",
            "createdDate": "2026-03-14T09:27:00.000Z",
            "status": "DEBUG",
            "message": "verbose detail"
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, LogStatus::Info);
    }

    #[test]
    fn test_api_error_extracts_error_field() {
        let err = api_error(500, r#"{"error": "store unavailable"}"#);
        assert_eq!(err.to_string(), "Server error: (500) store unavailable");
    }

    #[test]
    fn test_api_error_keeps_raw_body() {
        let err = api_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Server error: (502) Bad Gateway");
    }
}
