//! Not found page component
//!
//! Shown for unknown routes and for course or lesson ids missing from the
//! catalog.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage(
    #[prop(default = "Page Not Found")] title: &'static str,
    #[prop(default = "The page you're looking for doesn't exist or has been moved.")]
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-4rem)] bg-neutral-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-neutral-900 rounded-full flex items-center justify-center">
                    <Icon name=icons::BOOK class="w-12 h-12 opacity-60" />
                </div>

                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-2">{title}</h2>
                <p class="text-neutral-400 mb-8 max-w-md mx-auto">{description}</p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/courses"
                        attr:class="px-6 py-3 border border-neutral-700 text-white hover:bg-neutral-900 font-medium rounded-lg transition-colors"
                    >
                        "Browse Courses"
                    </A>
                </div>
            </div>
        </div>
    }
}
