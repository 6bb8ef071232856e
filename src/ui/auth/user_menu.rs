//! User menu component
//!
//! Shows login/signup links when signed out, or the user's avatar with a
//! dropdown (create course, sign out) when signed in.

use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::UserSummary;
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        auth.logout();
    };

    view! {
        <div class="relative">
            {move || {
                if auth.is_loading() && auth.user().is_none() {
                    return view! {
                        <div class="w-8 h-8 rounded-full bg-neutral-800 animate-pulse"></div>
                    }.into_any();
                }

                match auth.user() {
                    None => view! {
                        <div class="flex items-center gap-2">
                            <A
                                href="/login"
                                attr:class="px-3 py-1.5 text-sm font-medium text-neutral-300 hover:text-white transition-colors"
                            >
                                "Log In"
                            </A>
                            <A
                                href="/signup"
                                attr:class="px-3 py-1.5 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg transition-colors"
                            >
                                "Sign Up"
                            </A>
                        </div>
                    }.into_any(),
                    Some(user) => {
                        let display_name = user.display_name().to_string();
                        let username = user.username.clone();
                        let email = user.email.clone();
                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-neutral-800 transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <UserAvatar user=user size=32 />
                                    <span class="hidden sm:block text-sm font-medium text-white max-w-[120px] truncate">
                                        {display_name}
                                    </span>
                                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                </button>

                                <Show when=move || menu_open.get()>
                                    <div class="absolute right-0 mt-2 w-56 bg-neutral-900 rounded-lg shadow-lg border border-neutral-800 py-1 z-50">
                                        <div class="px-4 py-3 border-b border-neutral-800">
                                            <p class="text-sm font-medium text-white truncate">
                                                {username.clone()}
                                            </p>
                                            <p class="text-xs text-neutral-400 truncate">
                                                {email.clone()}
                                            </p>
                                        </div>

                                        <div class="py-1">
                                            <A
                                                href="/courses/create"
                                                attr:class="w-full px-4 py-2 text-sm text-left text-white hover:bg-neutral-800 transition-colors flex items-center gap-2"
                                            >
                                                <Icon name=icons::PLUS class="h-4 w-4" />
                                                "Create Course"
                                            </A>
                                        </div>

                                        <div class="border-t border-neutral-800 my-1"></div>

                                        <div class="py-1">
                                            <button
                                                class="w-full px-4 py-2 text-sm text-left text-red-500 hover:bg-red-900/20 transition-colors flex items-center gap-2"
                                                on:click=handle_logout
                                            >
                                                <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                "Log Out"
                                            </button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// Initials avatar with a color derived from the username
#[component]
pub fn UserAvatar(
    user: UserSummary,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let name = user.display_name();
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    let hash = name.bytes().fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    let colors = [
        "bg-blue-500",
        "bg-green-500",
        "bg-yellow-500",
        "bg-red-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let color = colors[(hash as usize) % colors.len()];

    view! {
        <div
            class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
            style=size_style
        >
            {initial}
        </div>
    }
}
