//! Course catalog page

use leptos::prelude::*;

use crate::core::catalog::ALL_CATEGORIES;
use crate::ui::courses::{CategoryFilter, CourseCard, filtered_courses};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let selected = RwSignal::new(ALL_CATEGORIES.to_string());
    let courses = filtered_courses(selected);

    view! {
        <div class="min-h-screen bg-neutral-950 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">"All Courses"</h1>
                    <p class="text-neutral-400 mt-2">"Pick a category to narrow the list."</p>
                </div>
                <CategoryFilter selected=selected />
                <Show
                    when=move || courses.with(|courses| !courses.is_empty())
                    fallback=|| view! { <p class="text-neutral-400">"No courses in this category yet."</p> }
                >
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        <For each=move || courses.get() key=|course| course.id.clone() let:course>
                            <CourseCard course=course />
                        </For>
                    </div>
                </Show>
            </div>
        </div>
    }
}
