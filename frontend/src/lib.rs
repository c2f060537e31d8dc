//! Memberload - Bulk member import console
//!
//! A WebAssembly frontend for importing pasted lists of email addresses
//! as members of a managed site, one request per address, with the
//! backend activity log alongside.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (site status)                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, instructions)                              │
//! │  ├── ImportForm (site picker, subject, addresses)            │
//! │  ├── ResultsSection (one row per submitted address)          │
//! │  └── LogsPanel (backend activity log)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer / ToastHost                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Site, ImportResult, LogEntry, etc.)
//! - [`components`] - UI components (Header, ImportForm, LogsPanel, etc.)
//! - [`services`] - Backend communication (sites, logs, import)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Sites
    Site,
    // Import
    ImportResult, ImportStatus,
    // Logs
    LogEntry, LogStatus,
    // Toasts
    Toast, ToastKind,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the page
    let (sites, set_sites) = create_signal(Vec::<Site>::new());
    let (selected_site, set_selected_site) = create_signal(None::<Site>);
    let (results, set_results) = create_signal(Vec::<ImportResult>::new());
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());
    let (logs_loading, set_logs_loading) = create_signal(false);
    let (toast, set_toast) = create_signal(None::<Toast>);

    // Initial data loads, once at startup
    load_sites(set_sites, selected_site, set_selected_site, set_toast);
    load_logs(set_logs, set_logs_loading, set_toast);

    view! {
        <Header sites=sites selected_site=selected_site/>

        <div class="container">
            <Hero/>

            <ImportForm
                sites=sites
                selected_site=selected_site
                set_selected_site=set_selected_site
                is_submitting=is_submitting
                set_is_submitting=set_is_submitting
                set_results=set_results
                set_logs=set_logs
                set_logs_loading=set_logs_loading
                set_toast=set_toast
            />

            // Results appear once a run starts
            <Show
                when=move || !results.get().is_empty() || is_submitting.get()
                fallback=|| view! { }
            >
                <ResultsSection results=results is_submitting=is_submitting/>
            </Show>

            <LogsPanel
                logs=logs
                set_logs=set_logs
                loading=logs_loading
                set_loading=set_logs_loading
                set_toast=set_toast
            />
        </div>

        <ToastHost toast=toast/>
        <Footer/>
    }
}
