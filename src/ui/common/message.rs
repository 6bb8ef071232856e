//! Inline banners for form-level errors and confirmations.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error banner, hidden when `None`
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-center gap-2 p-3 bg-red-900/30 border border-red-700 rounded-lg text-sm text-red-300">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4 shrink-0"/>
                <span class="break-words line-clamp-4">{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success banner, hidden when `None`
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="flex items-center gap-2 p-3 bg-green-900/30 border border-green-700 rounded-lg text-sm text-green-300">
                <Icon name=icons::CHECK class="w-4 h-4"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
