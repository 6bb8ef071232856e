use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Small spinning loader for inline use
#[component]
pub fn InlineSpinner(#[prop(default = "w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <span class="inline-flex animate-spin">
            <Icon name=icons::LOADER class=class />
        </span>
    }
}

/// Full-width centered spinner with a label
#[component]
pub fn LoadingSpinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-12 text-neutral-400">
            <InlineSpinner class="w-8 h-8" />
            <span class="text-sm">{label}</span>
        </div>
    }
}

/// Form submit button that shows a spinner while `loading`
#[component]
pub fn SubmitButton(
    #[prop(into)] loading: Signal<bool>,
    text: &'static str,
    #[prop(default = "Please wait...")] loading_text: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full py-2.5 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg
                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500
                   disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    <InlineSpinner />
                    {loading_text}
                </span>
            </Show>
        </button>
    }
}
