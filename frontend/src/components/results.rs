//! Per-address outcome list for the current run.

use leptos::*;

use crate::{ImportResult, ImportStatus};

#[component]
pub fn ResultsSection(
    results: ReadSignal<Vec<ImportResult>>,
    is_submitting: ReadSignal<bool>,
) -> impl IntoView {
    let succeeded = move || {
        results
            .get()
            .iter()
            .filter(|r| r.status == ImportStatus::Success)
            .count()
    };

    view! {
        <div class="results-section show" id="resultsSection">
            <div class="results-header">
                <div class="results-title">"📋 Import results"</div>
                <div class="results-summary">
                    {move || format!("{}/{} imported", succeeded(), results.get().len())}
                    {move || if is_submitting.get() { " (running)" } else { "" }}
                </div>
            </div>

            <div class="results-list" id="resultsList">
                <For
                    each=move || results.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, row)| {
                        view! {
                            <div class=format!("result-row {}", row.status.css_class())>
                                <span class="result-icon">{row.status.emoji()}</span>
                                <span class="result-email">{row.email.clone()}</span>
                                <span class="result-message">{row.message.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
