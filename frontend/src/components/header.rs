use leptos::*;

use crate::Site;

#[component]
pub fn Header(
    sites: ReadSignal<Vec<Site>>,
    selected_site: ReadSignal<Option<Site>>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"MEMBERLOAD"</a>
                <span class="badge">
                    {move || {
                        let count = sites.get().len();
                        if count == 1 {
                            "1 site".to_string()
                        } else {
                            format!("{} sites", count)
                        }
                    }}
                </span>
            </div>
            <div class="header-right">
                <div
                    class="site-status"
                    class:connected=move || selected_site.get().is_some()
                >
                    <span class="site-dot" class:connected=move || selected_site.get().is_some()></span>
                    <span id="siteText">
                        {move || if let Some(site) = selected_site.get() {
                            site.site_name
                        } else {
                            "No site selected".to_string()
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
