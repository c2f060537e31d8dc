//! Transient notification host.
//!
//! One toast at a time; showing a new one replaces the current one and
//! restarts the dismiss timer.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{Toast, ToastKind, TOAST_DISMISS_MS};

/// Show a toast and schedule its dismissal.
///
/// The timer only clears the toast it showed, so a newer toast is never
/// taken down by an older timer.
pub fn show_toast(set_toast: WriteSignal<Option<Toast>>, toast: Toast) {
    match toast.kind {
        ToastKind::Error => log::error!("{}", toast.message),
        ToastKind::Warning => log::warn!("{}", toast.message),
        _ => log::info!("{}", toast.message),
    }

    set_toast.set(Some(toast.clone()));

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        set_toast.update(|current| {
            if current.as_ref() == Some(&toast) {
                *current = None;
            }
        });
    });
}

/// Renders the current toast, if any.
#[component]
pub fn ToastHost(toast: ReadSignal<Option<Toast>>) -> impl IntoView {
    view! {
        <Show
            when=move || toast.get().is_some()
            fallback=|| view! { }
        >
            <div class=move || {
                let kind_class = toast
                    .get()
                    .map(|t| t.kind.css_class())
                    .unwrap_or_default();
                format!("toast {}", kind_class)
            }>
                {move || toast.get().map(|t| t.message).unwrap_or_default()}
            </div>
        </Show>
    }
}
