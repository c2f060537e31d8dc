//! Backend activity log panel.
//!
//! Loads the persisted activity log from the log store and displays it
//! with auto-scroll support. Clearing is confirmed in a modal, then the
//! list is re-fetched.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::toast::show_toast;
use crate::services::{clear_logs, fetch_logs};
use crate::{LogEntry, Toast};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    web_sys::window()
        .unwrap()
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
}

/// Render a `createdDate` as wall-clock time, falling back to the raw string.
fn format_timestamp(created: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| created.to_string())
}

/// Fetch the activity log into the shared signals.
/// Called at app startup, after each import run, and from the refresh button.
pub fn load_logs(
    set_logs: WriteSignal<Vec<LogEntry>>,
    set_loading: WriteSignal<bool>,
    set_toast: WriteSignal<Option<Toast>>,
) {
    spawn_local(async move {
        set_loading.set(true);
        match fetch_logs().await {
            Ok(entries) => {
                log::info!("📋 Loaded {} log entries", entries.len());
                set_logs.set(entries);
            }
            Err(e) => {
                show_toast(set_toast, Toast::error(format!("Could not load logs: {}", e)));
            }
        }
        set_loading.set(false);
    });
}

/// Activity log panel with refresh and modal-confirmed clear.
#[component]
pub fn LogsPanel(
    /// Signal for log data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for refresh and clear)
    set_logs: WriteSignal<Vec<LogEntry>>,
    /// Loading gate shared with every log fetch
    loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    set_toast: WriteSignal<Option<Toast>>,
) -> impl IntoView {
    // Reference to the log content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    let (confirm_clear, set_confirm_clear) = create_signal(false);
    let (refreshed_at, set_refreshed_at) = create_signal(String::new());

    // Stamp the refresh time and scroll to the newest entry when the list changes
    create_effect(move |_| {
        let _ = logs.get();

        set_refreshed_at.set(
            js_sys::Date::new_0()
                .to_locale_time_string("en-GB")
                .as_string()
                .unwrap_or_default(),
        );

        // Scroll to bottom after DOM update
        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let on_refresh = move |_| load_logs(set_logs, set_loading, set_toast);

    let on_confirm_clear = move |_| {
        set_confirm_clear.set(false);
        spawn_local(async move {
            set_loading.set(true);
            match clear_logs().await {
                Ok(()) => {
                    show_toast(set_toast, Toast::success("Activity log cleared."));
                    match fetch_logs().await {
                        Ok(entries) => set_logs.set(entries),
                        Err(e) => show_toast(
                            set_toast,
                            Toast::error(format!("Could not reload logs: {}", e)),
                        ),
                    }
                }
                Err(e) => {
                    // List stays as it was; stale beats gone
                    show_toast(set_toast, Toast::error(format!("Could not clear logs: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Activity log"</span>
                <span class="logs-refreshed">
                    {move || {
                        let at = refreshed_at.get();
                        if at.is_empty() { String::new() } else { format!("updated {}", at) }
                    }}
                </span>
                <button
                    class="logs-refresh"
                    on:click=on_refresh
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "⏳" } else { "↻ Refresh" }}
                </button>
                <button
                    class="logs-clear"
                    on:click=move |_| set_confirm_clear.set(true)
                    disabled=move || loading.get()
                >
                    "Clear"
                </button>
            </div>

            <div class="logs-content" node_ref=logs_container>
                <Show
                    when=move || logs.get().is_empty()
                    fallback=|| view! { }
                >
                    <div class="logs-empty">"No activity yet."</div>
                </Show>
                <For
                    each=move || logs.get()
                    key=|entry| entry.id.clone()
                    children=move |entry| {
                        view! {
                            <div class=format!("log-entry {}", entry.status.css_class())>
                                <span class="log-time">"[" {format_timestamp(&entry.created_date)} "] "</span>
                                <span class="log-icon">{entry.status.emoji()} " "</span>
                                {entry.message.clone()}
                                {entry.context.clone().map(|c| view! {
                                    <span class="log-context">" (" {c} ")"</span>
                                })}
                            </div>
                        }
                    }
                />
            </div>

            <Show
                when=move || confirm_clear.get()
                fallback=|| view! { }
            >
                <div class="modal-overlay">
                    <div class="modal">
                        <div class="modal-title">"Clear activity log?"</div>
                        <div class="modal-body">
                            "This removes every entry for all operators. There is no undo."
                        </div>
                        <div class="modal-actions">
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| set_confirm_clear.set(false)
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn-danger" on:click=on_confirm_clear>
                                "Clear"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn test_format_timestamp_renders_wall_clock() {
        assert_eq!(format_timestamp("2026-03-14T09:26:53.000Z"), "09:26:53");
        assert_eq!(format_timestamp("2026-03-14T09:26:53+02:00"), "09:26:53");
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
