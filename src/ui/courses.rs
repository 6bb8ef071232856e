//! Course catalog context and the components shared by the course pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog::{Catalog, Course, clamp_progress};
use crate::ui::icon::{Icon, icons};

/// Catalog shared by the course pages so lesson progress survives navigation
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub catalog: RwSignal<Catalog>,
}

impl CatalogContext {
    pub fn course(&self, course_id: &str) -> Option<Course> {
        self.catalog.with(|catalog| catalog.find(course_id).cloned())
    }

    /// Marks a lesson complete; false when the course or lesson is unknown.
    pub fn complete_lesson(&self, course_id: &str, lesson_id: &str) -> bool {
        let mut changed = false;
        self.catalog.update(|catalog| {
            if let Some(course) = catalog.find_mut(course_id) {
                changed = course.complete_lesson(lesson_id);
            }
        });
        if changed {
            tracing::debug!("Lesson {} of course {} completed", lesson_id, course_id);
        }
        changed
    }
}

pub fn provide_catalog_context() -> CatalogContext {
    let ctx = CatalogContext {
        catalog: RwSignal::new(Catalog::mock()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_catalog_context() -> CatalogContext {
    expect_context::<CatalogContext>()
}

/// Horizontal progress bar; the value is clamped to 0..=100
#[component]
pub fn ProgressBar(
    #[prop(into)] progress: Signal<f64>,
    #[prop(default = "")] text: &'static str,
    #[prop(default = true)] show_percentage: bool,
) -> impl IntoView {
    let percent = move || clamp_progress(progress.get());

    view! {
        <div class="w-full">
            {(show_percentage || !text.is_empty()).then(|| view! {
                <div class="flex justify-between text-xs mb-1 text-neutral-400">
                    <span>{text}</span>
                    {show_percentage.then(|| view! { <span>{move || format!("{}%", percent())}</span> })}
                </div>
            })}
            <div class="w-full bg-neutral-800 rounded-full h-2">
                <div
                    class="bg-blue-500 h-2 rounded-full transition-all duration-300 ease-in-out"
                    style=move || format!("width: {}%", percent())
                    role="progressbar"
                    aria-valuenow=move || percent().to_string()
                    aria-valuemin="0"
                    aria-valuemax="100"
                />
            </div>
        </div>
    }
}

/// Catalog tile linking to the course page
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = format!("/courses/{}", course.id);

    view! {
        <A href=href attr:class="block group">
            <div class="bg-neutral-900/50 border border-neutral-800 rounded-lg overflow-hidden group-hover:border-neutral-700 transition-all h-full flex flex-col">
                <div class="aspect-video bg-gradient-to-br from-blue-900/60 to-neutral-800 relative">
                    <span class="absolute top-2 right-2 bg-neutral-900/90 px-2 py-1 rounded text-sm text-white">
                        {course.level.to_string()}
                    </span>
                </div>
                <div class="p-5 flex-1">
                    <p class="text-xs uppercase tracking-wide text-blue-400 mb-1">{course.category.clone()}</p>
                    <h3 class="text-xl font-semibold text-white mb-2">{course.title.clone()}</h3>
                    <p class="text-neutral-400 text-sm mb-4">{course.description.clone()}</p>
                    <div class="flex items-center gap-4 text-sm text-neutral-400">
                        <span class="flex items-center gap-1">
                            <Icon name=icons::CLOCK class="w-4 h-4" />
                            {course.duration.clone()}
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon name=icons::USERS class="w-4 h-4" />
                            {course.students.to_string()}
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon name=icons::STAR class="w-4 h-4" />
                            {format!("{:.1}", course.rating)}
                        </span>
                    </div>
                </div>
                <div class="px-5 py-4 border-t border-neutral-800 flex justify-between items-center text-blue-400 font-medium">
                    <span>"Learn More"</span>
                    <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
                </div>
            </div>
        </A>
    }
}

/// Row of category filter buttons
#[component]
pub fn CategoryFilter(selected: RwSignal<String>) -> impl IntoView {
    let ctx = use_catalog_context();
    let categories = move || {
        ctx.catalog.with(|catalog| {
            catalog
                .categories()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="flex flex-wrap gap-2">
            <For each=categories key=|category| category.clone() let:category>
                {
                    let name = category.clone();
                    let class = move || {
                        if selected.with(|selected| *selected == category) {
                            "px-4 py-1.5 rounded-full text-sm border bg-blue-600 border-blue-600 text-white"
                        } else {
                            "px-4 py-1.5 rounded-full text-sm border border-neutral-700 text-neutral-300 hover:border-neutral-500"
                        }
                    };
                    let on_click = {
                        let name = name.clone();
                        move |_| selected.set(name.clone())
                    };
                    view! {
                        <button type="button" class=class on:click=on_click>
                            {name}
                        </button>
                    }
                }
            </For>
        </div>
    }
}

/// Courses in the selected category
pub fn filtered_courses(selected: RwSignal<String>) -> Signal<Vec<Course>> {
    let ctx = use_catalog_context();
    Signal::derive(move || {
        let category = selected.get();
        ctx.catalog.with(|catalog| {
            catalog
                .filter_by_category(&category)
                .into_iter()
                .cloned()
                .collect()
        })
    })
}
