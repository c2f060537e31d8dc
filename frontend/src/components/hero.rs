//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Bulk member import"</h1>
            <p class="subtitle">
                "Pick a target site and paste one email address per line. "
                "Each address is imported individually and gets a welcome email; "
                "results show up per address below."
            </p>
        </div>
    }
}
