//! Lesson player
//!
//! Shows one lesson with previous/next navigation and a completion button.
//! Progress lives in the catalog context, so the course page reflects it.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::catalog::{Course, LessonKind};
use crate::ui::courses::{ProgressBar, use_catalog_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::NotFoundPage;

#[component]
pub fn LessonPage() -> impl IntoView {
    let catalog = use_catalog_context();
    let params = use_params_map();
    let course_id = Memo::new(move |_| params.read().get("course_id").unwrap_or_default());
    let lesson_id = Memo::new(move |_| params.read().get("lesson_id").unwrap_or_default());
    let course = Memo::new(move |_| course_id.with(|id| catalog.course(id)));

    move || {
        let lesson_id = lesson_id.get();
        match course.get() {
            Some(course) if course.lesson(&lesson_id).is_some() => {
                view! { <LessonPlayer course=course lesson_id=lesson_id /> }.into_any()
            }
            _ => view! {
                <NotFoundPage
                    title="Lesson Not Found"
                    description="This lesson doesn't exist in the selected course."
                />
            }
            .into_any(),
        }
    }
}

fn lesson_href(course_id: &str, lesson_id: &str) -> String {
    format!("/courses/{}/lesson/{}", course_id, lesson_id)
}

/// One row of the course outline, owned so it can move into the view
#[derive(Debug, Clone, PartialEq)]
struct OutlineEntry {
    href: String,
    title: String,
    active: bool,
    completed: bool,
}

fn outline_entries(course: &Course, active_id: &str) -> Vec<OutlineEntry> {
    course
        .lessons
        .iter()
        .map(|item| OutlineEntry {
            href: lesson_href(&course.id, &item.id),
            title: item.title.clone(),
            active: item.id == active_id,
            completed: item.completed,
        })
        .collect()
}

fn kind_blurb(kind: LessonKind) -> &'static str {
    match kind {
        LessonKind::Video => "Watch the video, then mark the lesson complete.",
        LessonKind::Article => "Read through the article at your own pace.",
        LessonKind::Quiz => "Answer the questions to check your understanding.",
        LessonKind::Project => "Apply what you've learned in a hands-on project.",
    }
}

#[component]
fn LessonPlayer(course: Course, lesson_id: String) -> impl IntoView {
    let catalog = use_catalog_context();
    let Some(lesson) = course.lesson(&lesson_id).cloned() else {
        return ().into_any();
    };
    let neighbors = course.neighbors(&lesson_id);
    let previous = neighbors
        .and_then(|n| n.previous)
        .map(|id| lesson_href(&course.id, id));
    let next = neighbors
        .and_then(|n| n.next)
        .map(|id| lesson_href(&course.id, id));
    let progress = course.progress_percent() as f64;

    let course_id = StoredValue::new(course.id.clone());
    let current = StoredValue::new(lesson.id.clone());
    let on_complete = move |_| {
        course_id.with_value(|course_id| {
            current.with_value(|lesson_id| catalog.complete_lesson(course_id, lesson_id))
        });
    };

    let outline = outline_entries(&course, &lesson.id)
        .into_iter()
        .map(|entry| {
            let class = if entry.active {
                "flex items-center gap-2 px-3 py-2 rounded bg-neutral-800 text-white"
            } else {
                "flex items-center gap-2 px-3 py-2 rounded text-neutral-400 hover:bg-neutral-900"
            };
            let icon = if entry.completed { icons::CHECK } else { icons::PLAY };
            let title = entry.title;
            view! {
                <li>
                    <A href=entry.href attr:class=class>
                        <Icon name=icon class="w-4 h-4" />
                        <span class="text-sm">{title}</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-neutral-950 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 grid gap-8 lg:grid-cols-[1fr_20rem]">
                <div class="flex flex-col bg-neutral-900 border border-neutral-800 rounded-lg overflow-hidden">
                    <div class="p-4 border-b border-neutral-800 flex items-center justify-between">
                        <h1 class="text-xl font-bold">{lesson.title.clone()}</h1>
                        <span class="flex items-center gap-1 text-sm text-neutral-400">
                            <Icon name=icons::CLOCK class="w-4 h-4" />
                            {lesson.duration.clone()}
                        </span>
                    </div>

                    <div class="aspect-video bg-neutral-950 flex flex-col items-center justify-center gap-3 text-neutral-400">
                        <Icon name=icons::PLAY class="w-12 h-12" />
                        <span class="uppercase text-xs tracking-wide">{lesson.kind.to_string()}</span>
                        <p class="text-sm">{kind_blurb(lesson.kind)}</p>
                    </div>

                    <div class="p-4 border-t border-neutral-800 flex items-center justify-between gap-4">
                        {match previous {
                            Some(href) => view! {
                                <A href=href attr:class="flex items-center gap-1 text-sm text-neutral-300 hover:text-white">
                                    <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                                    "Previous"
                                </A>
                            }
                            .into_any(),
                            None => view! { <span /> }.into_any(),
                        }}

                        {if lesson.completed {
                            view! {
                                <span class="flex items-center gap-1 text-sm text-green-400">
                                    <Icon name=icons::CHECK class="w-4 h-4" />
                                    "Completed"
                                </span>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm font-medium"
                                    on:click=on_complete
                                >
                                    "Mark as Complete"
                                </button>
                            }
                            .into_any()
                        }}

                        {match next {
                            Some(href) => view! {
                                <A href=href attr:class="flex items-center gap-1 text-sm text-neutral-300 hover:text-white">
                                    "Next"
                                    <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4" />
                                </A>
                            }
                            .into_any(),
                            None => view! {
                                <A href=format!("/courses/{}", course.id) attr:class="text-sm text-blue-400 hover:text-blue-300">
                                    "Back to course"
                                </A>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>

                <aside class="space-y-4">
                    <A href=format!("/courses/{}", course.id) attr:class="block font-semibold hover:text-blue-400">
                        {course.title.clone()}
                    </A>
                    <ProgressBar progress=progress text="Course progress" />
                    <ol class="space-y-1">{outline}</ol>
                </aside>
            </div>
        </div>
    }
    .into_any()
}
