//! Course creation form
//!
//! Edits a `CourseDraft` in place. There is no course API yet, so a valid
//! draft is only summarized back to the author.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use uuid::Uuid;

use crate::core::catalog::{CourseDraft, CourseLevel, LessonDraft, LessonKind};
use crate::ui::common::SuccessMessage;
use crate::ui::icon::{Icon, icons};

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-neutral-900 border border-neutral-700 rounded-lg text-white \
                           placeholder-neutral-500 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn CreateCoursePage() -> impl IntoView {
    let draft = RwSignal::new(CourseDraft::default());
    let prerequisite = RwSignal::new(String::new());
    let problems = RwSignal::new(Vec::<String>::new());
    let published = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        published.set(None);
        match draft.with_untracked(CourseDraft::validate) {
            Ok(()) => {
                problems.set(Vec::new());
                let summary = draft.with_untracked(|draft| {
                    format!(
                        "\"{}\" is ready with {} sections and {} lessons.",
                        draft.title.trim(),
                        draft.sections.len(),
                        draft.total_lessons()
                    )
                });
                tracing::info!("Course draft validated: {}", summary);
                published.set(Some(summary));
            }
            Err(errors) => problems.set(errors.iter().map(ToString::to_string).collect()),
        }
    };

    let add_prerequisite = move |_| {
        let value = prerequisite.get_untracked();
        let mut added = false;
        draft.update(|draft| added = draft.add_prerequisite(&value));
        if added {
            prerequisite.set(String::new());
        }
    };

    let section_ids =
        move || draft.with(|draft| draft.sections.iter().map(|s| s.id).collect::<Vec<_>>());
    let prerequisites = move || {
        draft.with(|draft| {
            draft
                .prerequisites
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="min-h-screen bg-neutral-950 text-white">
            <form on:submit=on_submit class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-8" novalidate>
                <h1 class="text-3xl font-bold">"Create New Course"</h1>

                <section class="bg-neutral-900/50 border border-neutral-800 rounded-lg p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Course Information"</h2>

                    <label class="block space-y-1.5">
                        <span class="text-sm font-medium text-neutral-300">"Course Title"</span>
                        <input
                            class=INPUT_CLASS
                            placeholder="e.g. Introduction to Rust"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>

                    <label class="block space-y-1.5">
                        <span class="text-sm font-medium text-neutral-300">"Description"</span>
                        <textarea
                            class=INPUT_CLASS
                            rows="4"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        />
                    </label>

                    <div class="grid gap-4 md:grid-cols-3">
                        <label class="block space-y-1.5">
                            <span class="text-sm font-medium text-neutral-300">"Price (USD)"</span>
                            <input
                                class=INPUT_CLASS
                                inputmode="decimal"
                                placeholder="Leave empty for free"
                                prop:value=move || draft.with(|d| d.price.clone())
                                on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                            />
                        </label>
                        <label class="block space-y-1.5">
                            <span class="text-sm font-medium text-neutral-300">"Category"</span>
                            <input
                                class=INPUT_CLASS
                                placeholder="Web Development"
                                prop:value=move || draft.with(|d| d.category.clone())
                                on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                            />
                        </label>
                        <label class="block space-y-1.5">
                            <span class="text-sm font-medium text-neutral-300">"Level"</span>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || draft.with(|d| d.level.as_str().to_string())
                                on:change=move |ev| {
                                    if let Some(level) = CourseLevel::parse(&event_target_value(&ev)) {
                                        draft.update(|d| d.level = level);
                                    }
                                }
                            >
                                {CourseLevel::ALL
                                    .into_iter()
                                    .map(|level| view! { <option value=level.as_str()>{level.to_string()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>

                    <div class="space-y-2">
                        <span class="text-sm font-medium text-neutral-300">"Prerequisites"</span>
                        <div class="flex gap-2">
                            <input
                                class=INPUT_CLASS
                                placeholder="e.g. Basic JavaScript"
                                prop:value=move || prerequisite.get()
                                on:input=move |ev| prerequisite.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="px-3 py-2 bg-neutral-800 hover:bg-neutral-700 rounded-lg"
                                on:click=add_prerequisite
                            >
                                <Icon name=icons::PLUS class="w-4 h-4" />
                            </button>
                        </div>
                        <ul class="flex flex-wrap gap-2">
                            <For
                                each=prerequisites
                                key=|(index, item)| (*index, item.clone())
                                children=move |(index, item)| view! {
                                    <li class="flex items-center gap-1 px-2 py-1 bg-neutral-800 rounded text-sm">
                                        {item}
                                        <button
                                            type="button"
                                            class="opacity-60 hover:opacity-100"
                                            on:click=move |_| draft.update(|d| d.remove_prerequisite(index))
                                        >
                                            <Icon name=icons::TRASH class="w-3 h-3" />
                                        </button>
                                    </li>
                                }
                            />
                        </ul>
                    </div>
                </section>

                <section class="bg-neutral-900/50 border border-neutral-800 rounded-lg p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-semibold">"Course Content"</h2>
                        <button
                            type="button"
                            class="flex items-center gap-1 px-3 py-1.5 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm"
                            on:click=move |_| {
                                draft.update(|d| {
                                    d.add_section();
                                });
                            }
                        >
                            <Icon name=icons::PLUS class="w-4 h-4" />
                            "Add Section"
                        </button>
                    </div>
                    <For each=section_ids key=|id| *id let:section_id>
                        <SectionEditor draft=draft section_id=section_id />
                    </For>
                </section>

                <Show when=move || problems.with(|p| !p.is_empty())>
                    <ul class="p-3 bg-red-900/30 border border-red-700 rounded-lg text-sm text-red-300 space-y-1">
                        <For each=move || problems.get() key=|problem| problem.clone() let:problem>
                            <li>{problem}</li>
                        </For>
                    </ul>
                </Show>
                <SuccessMessage message=published />

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg"
                >
                    "Create Course"
                </button>
            </form>
        </div>
    }
}

#[component]
fn SectionEditor(draft: RwSignal<CourseDraft>, section_id: Uuid) -> impl IntoView {
    let number = move || {
        draft.with(|d| {
            d.sections
                .iter()
                .position(|s| s.id == section_id)
                .map(|index| index + 1)
                .unwrap_or_default()
        })
    };
    let title = move || {
        draft.with(|d| {
            d.sections
                .iter()
                .find(|s| s.id == section_id)
                .map(|s| s.title.clone())
                .unwrap_or_default()
        })
    };
    let lesson_ids = move || {
        draft.with(|d| {
            d.sections
                .iter()
                .find(|s| s.id == section_id)
                .map(|s| s.lessons.iter().map(|l| l.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="border border-neutral-800 rounded-lg p-4 space-y-3">
            <div class="flex items-center gap-2">
                <span class="text-sm text-neutral-500 w-20">{move || format!("Section {}", number())}</span>
                <input
                    class=INPUT_CLASS
                    placeholder="Section title"
                    prop:value=title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(section) = d.section_mut(section_id) {
                                section.title = value;
                            }
                        });
                    }
                />
                <button
                    type="button"
                    class="p-2 opacity-60 hover:opacity-100"
                    on:click=move |_| {
                        draft.update(|d| {
                            d.remove_section(section_id);
                        });
                    }
                >
                    <Icon name=icons::TRASH class="w-4 h-4" />
                </button>
            </div>

            <For each=lesson_ids key=|id| *id let:lesson_id>
                <LessonEditor draft=draft section_id=section_id lesson_id=lesson_id />
            </For>

            <button
                type="button"
                class="flex items-center gap-1 text-sm text-blue-400 hover:text-blue-300"
                on:click=move |_| {
                    draft.update(|d| {
                        d.add_lesson(section_id);
                    });
                }
            >
                <Icon name=icons::PLUS class="w-4 h-4" />
                "Add Lesson"
            </button>
        </div>
    }
}

#[component]
fn LessonEditor(draft: RwSignal<CourseDraft>, section_id: Uuid, lesson_id: Uuid) -> impl IntoView {
    let read = move |f: fn(&LessonDraft) -> String| {
        draft.with(|d| {
            d.sections
                .iter()
                .find(|s| s.id == section_id)
                .and_then(|s| s.lessons.iter().find(|l| l.id == lesson_id))
                .map(f)
                .unwrap_or_default()
        })
    };
    let edit = move |apply: &dyn Fn(&mut LessonDraft)| {
        draft.update(|d| {
            if let Some(lesson) = d
                .section_mut(section_id)
                .and_then(|s| s.lessons.iter_mut().find(|l| l.id == lesson_id))
            {
                apply(lesson);
            }
        });
    };

    view! {
        <div class="ml-6 grid gap-2 md:grid-cols-[1fr_8rem_6rem_auto] items-center">
            <input
                class=INPUT_CLASS
                placeholder="Lesson title"
                prop:value=move || read(|l| l.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(&|l: &mut LessonDraft| l.title = value.clone());
                }
            />
            <select
                class=INPUT_CLASS
                prop:value=move || read(|l| l.kind.to_string())
                on:change=move |ev| {
                    if let Some(kind) = LessonKind::parse(&event_target_value(&ev)) {
                        edit(&|l: &mut LessonDraft| l.kind = kind);
                    }
                }
            >
                {LessonKind::ALL
                    .into_iter()
                    .map(|kind| view! { <option value=kind.to_string()>{kind.to_string()}</option> })
                    .collect_view()}
            </select>
            <input
                class=INPUT_CLASS
                placeholder="10 min"
                prop:value=move || read(|l| l.duration.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(&|l: &mut LessonDraft| l.duration = value.clone());
                }
            />
            <button
                type="button"
                class="p-2 opacity-60 hover:opacity-100"
                on:click=move |_| {
                    draft.update(|d| {
                        d.remove_lesson(section_id, lesson_id);
                    });
                }
            >
                <Icon name=icons::TRASH class="w-4 h-4" />
            </button>
        </div>
    }
}
