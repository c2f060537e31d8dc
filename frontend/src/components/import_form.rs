//! Import form: site picker, subject, pasted addresses, and the
//! sequential submission loop.
//!
//! One request per address, in pasted order. Individual failures become
//! result rows and never stop the run; the activity log is re-fetched
//! once the run finishes.

use leptos::*;
use web_sys::Event;

use super::logs::load_logs;
use super::toast::show_toast;
use crate::services::{fetch_sites, import_member, parse_recipients};
use crate::{ImportResult, ImportStatus, LogEntry, Site, Toast, DEFAULT_SUBJECT};

/// Fetch the site list into the shared signals.
/// Called once at app startup.
///
/// Keeps whatever was selected; only defaults to the first entry when
/// nothing is selected yet. A failure leaves prior state untouched.
pub fn load_sites(
    set_sites: WriteSignal<Vec<Site>>,
    selected_site: ReadSignal<Option<Site>>,
    set_selected_site: WriteSignal<Option<Site>>,
    set_toast: WriteSignal<Option<Toast>>,
) {
    spawn_local(async move {
        match fetch_sites().await {
            Ok(sites) => {
                log::info!("🏠 Loaded {} managed sites", sites.len());
                if selected_site.get_untracked().is_none() {
                    set_selected_site.set(sites.first().cloned());
                }
                set_sites.set(sites);
            }
            Err(e) => {
                show_toast(set_toast, Toast::error(format!("Could not load sites: {}", e)));
            }
        }
    });
}

#[component]
pub fn ImportForm(
    sites: ReadSignal<Vec<Site>>,
    selected_site: ReadSignal<Option<Site>>,
    set_selected_site: WriteSignal<Option<Site>>,
    is_submitting: ReadSignal<bool>,
    set_is_submitting: WriteSignal<bool>,
    set_results: WriteSignal<Vec<ImportResult>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
    set_logs_loading: WriteSignal<bool>,
    set_toast: WriteSignal<Option<Toast>>,
) -> impl IntoView {
    let (email_text, set_email_text) = create_signal(String::new());
    let (subject, set_subject) = create_signal(DEFAULT_SUBJECT.to_string());

    let on_site_change = move |ev: Event| {
        let value = event_target_value(&ev);
        let site = sites.get().into_iter().find(|s| s.site_id == value);
        set_selected_site.set(site);
    };

    let on_submit = move |_| {
        let Some(site) = selected_site.get() else {
            show_toast(set_toast, Toast::warning("Select a target site first."));
            return;
        };

        let recipients = parse_recipients(&email_text.get());
        if recipients.is_empty() {
            show_toast(
                set_toast,
                Toast::warning("No valid email addresses found. Paste one address per line."),
            );
            return;
        }

        let subject_line = subject.get();

        // New run: drop the previous results before the first request
        set_results.set(Vec::new());
        set_is_submitting.set(true);
        log::info!(
            "📤 Importing {} members into {}",
            recipients.len(),
            site.site_name
        );

        spawn_local(async move {
            for email in &recipients {
                let result = import_member(&site.site_id, email, &subject_line).await;
                match result.status {
                    ImportStatus::Success => log::info!("✅ {}: {}", result.email, result.message),
                    ImportStatus::Error => log::error!("❌ {}: {}", result.email, result.message),
                }
                set_results.update(|rows| rows.push(result));
            }

            set_is_submitting.set(false);

            // The backend logged every attempt; pick the new entries up
            load_logs(set_logs, set_logs_loading, set_toast);
        });
    };

    view! {
        <div class="import-form" id="importForm">
            <div class="form-row">
                <label for="siteSelect">"Target site"</label>
                <select
                    id="siteSelect"
                    on:change=on_site_change
                    prop:value=move || {
                        selected_site.get().map(|s| s.site_id).unwrap_or_default()
                    }
                    disabled=move || is_submitting.get()
                >
                    <For
                        each=move || sites.get()
                        key=|site| site.id.clone()
                        children=move |site| {
                            view! {
                                <option value=site.site_id.clone()>{site.site_name.clone()}</option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="form-row">
                <label for="subjectInput">"Welcome email subject"</label>
                <input
                    type="text"
                    id="subjectInput"
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                    disabled=move || is_submitting.get()
                />
            </div>

            <div class="form-row">
                <label for="emailInput">"Email addresses"</label>
                <textarea
                    id="emailInput"
                    rows="8"
                    placeholder="jane@example.com\njoe@example.com"
                    prop:value=move || email_text.get()
                    on:input=move |ev| set_email_text.set(event_target_value(&ev))
                    disabled=move || is_submitting.get()
                ></textarea>
                <div class="form-hint">
                    {move || {
                        let count = parse_recipients(&email_text.get()).len();
                        if count == 1 {
                            "1 address ready".to_string()
                        } else {
                            format!("{} addresses ready", count)
                        }
                    }}
                </div>
            </div>

            <button
                class="btn btn-primary"
                id="importBtn"
                on:click=on_submit
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() {
                    "⏳ Importing..."
                } else {
                    "Import members"
                }}
            </button>
        </div>
    }
}
