//! Site header and the card frame shared by the auth pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;

/// Top navigation bar
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 border-b border-neutral-800 bg-neutral-950/90 backdrop-blur">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <span class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center text-white font-bold">
                            "C"
                        </span>
                        <span class="text-xl font-bold text-white">"Cognify"</span>
                    </A>

                    <nav class="hidden md:flex items-center gap-6 text-sm text-neutral-300">
                        <A href="/" attr:class="hover:text-white transition-colors">"Home"</A>
                        <A href="/courses" attr:class="hover:text-white transition-colors">"Courses"</A>
                    </nav>

                    <UserMenu />
                </div>
            </div>
        </header>
    }
}

/// Centered card used by the login, signup and password pages
#[component]
pub fn AuthCard(
    title: &'static str,
    #[prop(default = "")] subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-4rem)] flex items-center justify-center px-4 py-12 bg-gradient-to-b from-neutral-900 to-neutral-950">
            <div class="max-w-md w-full mx-auto rounded-2xl p-4 md:p-8 bg-black border border-neutral-800 shadow-lg">
                <h2 class="text-2xl font-bold text-white">{title}</h2>
                {(!subtitle.is_empty()).then(|| view! {
                    <p class="mt-2 text-sm text-neutral-400">{subtitle}</p>
                })}
                <div class="mt-6">{children()}</div>
            </div>
        </div>
    }
}
