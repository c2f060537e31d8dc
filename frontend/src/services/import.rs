//! Member import requests and result mapping.
//!
//! One request per address. The import service creates the member on the
//! target site and dispatches the welcome email; the console turns each
//! response, success or failure, into an [`ImportResult`] row.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ImportResult, ImportStatus, FUNCTIONS_BASE};

/// Message shown when the backend reports the address is already a member.
pub const ALREADY_EXISTS_MESSAGE: &str = "Member already exists on this site.";

/// Message shown when a success body carries no message of its own.
const DEFAULT_SUCCESS_MESSAGE: &str = "Imported.";

/// Split pasted text into the addresses that will actually be submitted.
///
/// One address per line. Lines are trimmed and anything without an `@`
/// is dropped; order is preserved.
pub fn parse_recipients(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| line.contains('@'))
        .map(str::to_string)
        .collect()
}

/// Body sent to the import endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportRequest<'a> {
    target_site_id: &'a str,
    email: &'a str,
    custom_subject: &'a str,
}

/// Error body returned by the import endpoint.
///
/// The application error code sits two `details` levels deep.
#[derive(Debug, Clone, Deserialize)]
struct ImportErrorBody {
    message: Option<String>,
    details: Option<ErrorDetails>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorDetails {
    details: Option<InnerDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InnerDetails {
    application_error: Option<ApplicationError>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApplicationError {
    code: Option<String>,
}

impl ImportErrorBody {
    fn application_error_code(&self) -> Option<&str> {
        self.details
            .as_ref()?
            .details
            .as_ref()?
            .application_error
            .as_ref()?
            .code
            .as_deref()
    }
}

/// Map a non-success import response onto an operator-facing message.
fn friendly_import_error(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ImportErrorBody>(body) {
        if parsed.application_error_code() == Some("ALREADY_EXISTS") {
            return ALREADY_EXISTS_MESSAGE.to_string();
        }
        if let Some(message) = parsed.message {
            if !message.is_empty() {
                return message;
            }
        }
    }
    format!("Import failed (HTTP {}).", status)
}

/// Import a single address into a site.
///
/// Never fails the caller: every outcome, including network and parse
/// failures, comes back as a result row so the submission loop can keep
/// going.
pub async fn import_member(site_id: &str, email: &str, subject: &str) -> ImportResult {
    match send_import(site_id, email, subject).await {
        Ok((message, payload)) => ImportResult {
            email: email.to_string(),
            status: ImportStatus::Success,
            message,
            payload: Some(payload),
        },
        Err(message) => ImportResult {
            email: email.to_string(),
            status: ImportStatus::Error,
            message,
            payload: None,
        },
    }
}

async fn send_import(site_id: &str, email: &str, subject: &str) -> Result<(String, Value), String> {
    let url = format!("{}/importUsers", FUNCTIONS_BASE);
    let body = ImportRequest {
        target_site_id: site_id,
        email,
        custom_subject: subject,
    };

    let request = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    if !response.ok() {
        return Err(friendly_import_error(status, &text));
    }

    let payload: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
    let message = payload
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
        .to_string();

    Ok((message, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipients_keeps_order_and_drops_invalid() {
        let input = "a@x.com\n\nbad\nb@x.com";
        assert_eq!(parse_recipients(input), vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_parse_recipients_trims_whitespace() {
        let input = "  jane@example.com  \r\n\tjoe@example.com\nnot-an-address\n   ";
        assert_eq!(
            parse_recipients(input),
            vec!["jane@example.com", "joe@example.com"]
        );
    }

    #[test]
    fn test_parse_recipients_empty_input() {
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients("\n\nplain text\n").is_empty());
    }

    #[test]
    fn test_already_exists_maps_to_fixed_message() {
        let body = r#"{
            "message": "duplicate key",
            "details": {
                "details": {
                    "applicationError": {"code": "ALREADY_EXISTS"}
                }
            }
        }"#;
        assert_eq!(friendly_import_error(409, body), ALREADY_EXISTS_MESSAGE);
    }

    #[test]
    fn test_other_codes_fall_back_to_backend_message() {
        let body = r#"{
            "message": "Mailbox rejected the address",
            "details": {
                "details": {
                    "applicationError": {"code": "MAILBOX_REJECTED"}
                }
            }
        }"#;
        assert_eq!(
            friendly_import_error(400, body),
            "Mailbox rejected the address"
        );
    }

    #[test]
    fn test_message_without_details() {
        let body = r#"{"message": "Site is over its member quota"}"#;
        assert_eq!(
            friendly_import_error(403, body),
            "Site is over its member quota"
        );
    }

    #[test]
    fn test_unparseable_body_uses_default() {
        assert_eq!(
            friendly_import_error(500, "<html>Internal Server Error</html>"),
            "Import failed (HTTP 500)."
        );
        assert_eq!(
            friendly_import_error(503, r#"{"message": ""}"#),
            "Import failed (HTTP 503)."
        );
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = ImportRequest {
            target_site_id: "site-alpha",
            email: "jane@example.com",
            custom_subject: "Welcome aboard!",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["targetSiteId"], "site-alpha");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["customSubject"], "Welcome aboard!");
    }
}
