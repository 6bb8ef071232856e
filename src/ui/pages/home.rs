//! Home page: hero banner and featured courses with a category filter.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog::ALL_CATEGORIES;
use crate::ui::auth::use_auth_context;
use crate::ui::courses::{CategoryFilter, CourseCard, filtered_courses};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();
    let selected = RwSignal::new(ALL_CATEGORIES.to_string());
    let courses = filtered_courses(selected);

    let greeting = move || match auth.user() {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Learn without limits".to_string(),
    };

    view! {
        <div class="bg-neutral-950 text-white">
            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">{greeting}</h1>
                <p class="text-lg text-neutral-400 max-w-2xl mx-auto mb-8">
                    "Build real skills with courses taught by industry experts."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A
                        href="/courses"
                        attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                    >
                        "Explore Courses"
                    </A>
                    <Show when=move || !auth.is_authenticated()>
                        <A
                            href="/signup"
                            attr:class="px-6 py-3 border border-neutral-700 hover:bg-neutral-900 rounded-lg font-medium transition-colors"
                        >
                            "Get Started Free"
                        </A>
                    </Show>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-20">
                <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-8">
                    <h2 class="text-3xl font-bold">"Featured Courses"</h2>
                    <CategoryFilter selected=selected />
                </div>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For each=move || courses.get() key=|course| course.id.clone() let:course>
                        <CourseCard course=course />
                    </For>
                </div>
            </section>
        </div>
    }
}
