use crate::core::forms::{Field, FieldErrors};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Reactive message for one field of a `FieldErrors` signal
pub fn field_error(errors: RwSignal<FieldErrors>, field: Field) -> Signal<String> {
    Signal::derive(move || errors.with(|errors| errors.get(field).to_string()))
}

/// Callback that clears one field's error, for `FormField::on_edit`
pub fn clear_field(errors: RwSignal<FieldErrors>, field: Field) -> Callback<()> {
    Callback::new(move |_| errors.update(|errors| errors.check(field, Ok(()))))
}

/// Labelled input with an inline error line
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input id, also used as the `name` attribute
    id: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
    /// Current value signal
    value: RwSignal<String>,
    /// Error message; empty means valid
    #[prop(into)]
    error: Signal<String>,
    /// Called after every edit, e.g. to clear the field's error
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="block text-sm font-medium text-neutral-300">
                {label}
            </label>
            <input
                type=input_type
                id=id
                name=id
                autocomplete=autocomplete
                placeholder=placeholder
                class="w-full px-3 py-2 bg-neutral-900 border border-neutral-700 rounded-lg text-white
                       placeholder-neutral-500 focus:outline-none focus:ring-2 focus:ring-blue-500
                       focus:border-transparent transition-colors"
                class:border-red-500=move || !error.get().is_empty()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(callback) = on_edit.as_ref() {
                        callback.run(());
                    }
                }
            />
            <FieldError error=error />
        </div>
    }
}

/// Error line under a field, hidden while the message is empty
#[component]
pub fn FieldError(#[prop(into)] error: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <div class="flex items-center gap-1 mt-1 text-sm text-red-500">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{move || error.get()}</span>
            </div>
        </Show>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    label: &'static str,
    checked: RwSignal<bool>,
    /// Called with the new state after each toggle
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-neutral-300 cursor-pointer">
            <input
                type="checkbox"
                class="w-4 h-4 rounded border-neutral-600 text-blue-600 focus:ring-2 focus:ring-blue-500"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    let value = event_target_checked(&ev);
                    checked.set(value);
                    if let Some(on_change) = on_change {
                        on_change.run(value);
                    }
                }
            />
            {label}
        </label>
    }
}
