//! Common types used across the console.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Site Types** - Managed sites the operator imports into
//! - **Import Types** - Per-address submission outcomes
//! - **Log Types** - Backend activity log records
//! - **Toast Types** - Transient notifications
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Site Types
// =============================================================================

/// A managed site the operator can import members into.
///
/// Fetched once from the site registry; used only for selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Registry record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name shown in the picker.
    pub site_name: String,
    /// Target id sent with every import request.
    pub site_id: String,
}

// =============================================================================
// Import Types
// =============================================================================

/// Outcome of a single import attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImportStatus {
    /// Member created, welcome email dispatched
    Success,
    /// Backend rejected the address or the request failed
    Error,
}

impl ImportStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ImportStatus::Success => "result-success",
            ImportStatus::Error => "result-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ImportStatus::Success => "✅",
            ImportStatus::Error => "❌",
        }
    }
}

/// One row of the results list.
///
/// Created once per submitted address, appended in submission order,
/// never mutated afterwards. The list is cleared at the start of each run.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportResult {
    /// Address as submitted
    pub email: String,
    /// Success or error
    pub status: ImportStatus,
    /// Operator-facing outcome message
    pub message: String,
    /// Raw backend payload on success, kept for inspection
    pub payload: Option<serde_json::Value>,
}

// =============================================================================
// Log Types
// =============================================================================

/// Severity of a backend activity log record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogStatus {
    /// Completed operation
    Success,
    /// Failed operation
    Error,
    /// Anything else, including statuses this build does not know
    #[serde(other)]
    Info,
}

impl LogStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogStatus::Info => "log-info",
            LogStatus::Success => "log-success",
            LogStatus::Error => "log-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            LogStatus::Info => "ℹ️",
            LogStatus::Success => "✅",
            LogStatus::Error => "❌",
        }
    }
}

/// A single activity log record from the backend store.
///
/// The store owns these entirely; the console only reads and clear-alls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Record id
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp, RFC 3339
    pub created_date: String,
    /// Severity
    pub status: LogStatus,
    /// Log message
    pub message: String,
    /// Operation context, when the backend recorded one
    #[serde(default)]
    pub context: Option<String>,
}

// =============================================================================
// Toast Types
// =============================================================================

/// Kind of a transient notification.
#[derive(Clone, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }
}

/// A transient notification, auto-dismissed by the toast host.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all backend calls.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Request could not be sent or the connection dropped.
    Network(String),
    /// Backend answered with a non-success status.
    Api(String),
    /// Response body was not the JSON we expected.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Api(msg) => write!(f, "Server error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
