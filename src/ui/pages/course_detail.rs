//! Course overview with the lesson list and a continue button

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::catalog::{Course, Lesson};
use crate::ui::courses::{ProgressBar, use_catalog_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::NotFoundPage;

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let catalog = use_catalog_context();
    let params = use_params_map();
    let course = Memo::new(move |_| {
        let course_id = params.read().get("course_id").unwrap_or_default();
        catalog.course(&course_id)
    });

    move || match course.get() {
        Some(course) => view! { <CourseOverview course=course /> }.into_any(),
        None => view! {
            <NotFoundPage
                title="Course Not Found"
                description="This course doesn't exist or is no longer available."
            />
        }
        .into_any(),
    }
}

#[component]
fn CourseOverview(course: Course) -> impl IntoView {
    let progress = course.progress_percent() as f64;
    let resume = course
        .resume_lesson()
        .map(|lesson| format!("/courses/{}/lesson/{}", course.id, lesson.id));
    let resume_label = if course.completed_count() == 0 {
        "Start Course"
    } else {
        "Continue Learning"
    };
    let price = if course.price > 0.0 {
        format!("${:.2}", course.price)
    } else {
        "Free".to_string()
    };

    let course_id = course.id.clone();
    let lessons = course
        .lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| view! { <LessonRow course_id=course_id.clone() index=index lesson=lesson.clone() /> })
        .collect_view();

    view! {
        <div class="min-h-screen bg-neutral-950 text-white">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-10">
                <A href="/courses" attr:class="inline-flex items-center gap-1 text-sm text-neutral-400 hover:text-white">
                    <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                    "All courses"
                </A>

                <header class="space-y-4">
                    <p class="text-sm uppercase tracking-wide text-blue-400">
                        {course.category.clone()} " · " {course.level.to_string()}
                    </p>
                    <h1 class="text-3xl md:text-4xl font-bold">{course.title.clone()}</h1>
                    <p class="text-neutral-400">{course.description.clone()}</p>
                    <p class="text-sm text-neutral-300">
                        {course.instructor.clone()}
                        <span class="text-neutral-500">" · " {course.instructor_role.clone()}</span>
                    </p>
                    <div class="flex flex-wrap items-center gap-4 text-sm text-neutral-400">
                        <span class="flex items-center gap-1">
                            <Icon name=icons::STAR class="w-4 h-4" />
                            {format!("{:.1}", course.rating)}
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon name=icons::USERS class="w-4 h-4" />
                            {format!("{} students", course.students)}
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon name=icons::CLOCK class="w-4 h-4" />
                            {course.duration.clone()}
                        </span>
                        <span class="font-semibold text-white">{price}</span>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {course
                            .tags
                            .iter()
                            .map(|tag| view! {
                                <span class="px-2 py-0.5 text-xs rounded bg-neutral-800 text-neutral-300">{tag.clone()}</span>
                            })
                            .collect_view()}
                    </div>
                </header>

                <section class="space-y-4">
                    <ProgressBar progress=progress text="Course progress" />
                    {resume.map(|href| view! {
                        <A
                            href=href
                            attr:class="inline-flex items-center gap-2 px-5 py-2.5 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium"
                        >
                            <Icon name=icons::PLAY class="w-4 h-4" />
                            {resume_label}
                        </A>
                    })}
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-4">
                        {format!("Course Content ({} lessons)", course.lessons.len())}
                    </h2>
                    <ol class="divide-y divide-neutral-800 border border-neutral-800 rounded-lg">
                        {lessons}
                    </ol>
                </section>
            </div>
        </div>
    }
}

#[component]
fn LessonRow(course_id: String, index: usize, lesson: Lesson) -> impl IntoView {
    let href = format!("/courses/{}/lesson/{}", course_id, lesson.id);
    let icon = if lesson.completed { icons::CHECK } else { icons::PLAY };

    view! {
        <li>
            <A href=href attr:class="flex items-center gap-4 px-4 py-3 hover:bg-neutral-900 transition-colors">
                <span class="w-6 text-sm text-neutral-500">{index + 1}</span>
                <Icon name=icon class="w-4 h-4" />
                <span class="flex-1">{lesson.title.clone()}</span>
                <span class="text-xs text-neutral-500 capitalize">{lesson.kind.to_string()}</span>
                <span class="text-sm text-neutral-400">{lesson.duration.clone()}</span>
            </A>
        </li>
    }
}
