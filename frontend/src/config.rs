//! Application configuration.
//!
//! Centralized configuration for the Memberload console.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Base path of the backend HTTP functions.
///
/// Same origin as the page; the site registry, import service and
/// log store all live under it.
pub const FUNCTIONS_BASE: &str = "/_functions";

/// Application name shown in the page chrome.
pub const APP_NAME: &str = "Memberload";

/// Subject line the subject field starts out with.
pub const DEFAULT_SUBJECT: &str = "Welcome aboard!";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DISMISS_MS: u32 = 4000;
