//! Login page component
//!
//! Email and password sign-in with an optional remembered email. Redirects
//! home on success.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::forms::{Field, FieldErrors, LoginForm, SubmitState};
use crate::core::error::FormError;
use crate::ui::auth::{preference_store, use_auth_context};
use crate::ui::common::{
    CheckboxField, ErrorMessage, FormField, SubmitButton, clear_field, field_error,
};
use crate::ui::layout::AuthCard;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let state = RwSignal::new(SubmitState::Idle);

    // Prefill the remembered email once mounted in the browser
    Effect::new(move |_| {
        let restored = LoginForm::restore(preference_store().as_ref());
        if restored.remember_me {
            email.set(restored.email);
            remember_me.set(true);
        }
    });

    let on_remember_change = Callback::new(move |value: bool| {
        let mut form = LoginForm {
            email: email.get_untracked(),
            ..LoginForm::default()
        };
        form.set_remember_me(value, preference_store().as_ref());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };

        let field_errors = form.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        state.set(SubmitState::InFlight);

        let navigate = use_navigate();
        auth.run(move |client| async move {
            let store = preference_store();
            let result = form.submit(&client, store.as_ref()).await;
            state.set(SubmitState::from_result(&result));
            match result {
                Ok(logged_in) => navigate(logged_in.redirect.path(), Default::default()),
                Err(FormError::Invalid(field_errors)) => errors.set(field_errors),
                Err(FormError::Failed(_)) => {}
            }
        });
    };

    let general_error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let loading = Signal::derive(move || state.with(SubmitState::is_in_flight));

    view! {
        <AuthCard title="Welcome back to Cognify" subtitle="Log in to continue learning">
            <form on:submit=on_submit class="space-y-5" novalidate>
                <ErrorMessage error=general_error />

                <FormField
                    label="Email Address"
                    id="email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    value=email
                    error=field_error(errors, Field::Email)
                    on_edit=clear_field(errors, Field::Email)
                />
                <FormField
                    label="Password"
                    id="password"
                    input_type="password"
                    autocomplete="current-password"
                    placeholder="••••••••"
                    value=password
                    error=field_error(errors, Field::Password)
                    on_edit=clear_field(errors, Field::Password)
                />

                <div class="flex items-center justify-between">
                    <CheckboxField label="Remember me" checked=remember_me on_change=on_remember_change />
                    <A href="/forgot-password" attr:class="text-sm text-blue-500 hover:text-blue-400">
                        "Forgot password?"
                    </A>
                </div>

                <SubmitButton loading=loading text="Log in" loading_text="Logging in..." />

                <p class="text-center text-sm text-neutral-400">
                    "Don't have an account? "
                    <A href="/signup" attr:class="text-blue-500 hover:text-blue-400 font-medium">"Sign up"</A>
                </p>
            </form>
        </AuthCard>
    }
}
