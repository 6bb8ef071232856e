//! Forgot-password page: asks the API to email a reset link.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::error::FormError;
use crate::core::forms::{EmailForm, Field, FieldErrors, SubmitState};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    ErrorMessage, FormField, SubmitButton, SuccessMessage, clear_field, field_error,
};
use crate::ui::layout::AuthCard;

const RESET_LINK_SENT: &str = "If an account exists for that email, a reset link is on its way.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth_context();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let state = RwSignal::new(SubmitState::Idle);
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = EmailForm {
            email: email.get_untracked(),
        };
        let field_errors = form.validate_for_reset();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        notice.set(None);
        state.set(SubmitState::InFlight);

        auth.run(move |client| async move {
            let result = form.submit_reset(&client).await;
            state.set(SubmitState::from_result(&result));
            match result {
                Ok(sent) => notice.set(Some(sent.message_or(RESET_LINK_SENT).to_string())),
                Err(FormError::Invalid(field_errors)) => errors.set(field_errors),
                Err(FormError::Failed(_)) => {}
            }
        });
    };

    let general_error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let loading = Signal::derive(move || state.with(SubmitState::is_in_flight));

    view! {
        <AuthCard
            title="Forgot your password?"
            subtitle="Enter your email and we'll send you a link to reset it"
        >
            <form on:submit=on_submit class="space-y-5" novalidate>
                <ErrorMessage error=general_error />
                <SuccessMessage message=notice />

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

                <SubmitButton loading=loading text="Send reset link" loading_text="Sending..." />

                <p class="text-center text-sm text-neutral-400">
                    <A href="/login" attr:class="text-blue-500 hover:text-blue-400">"Back to login"</A>
                </p>
            </form>
        </AuthCard>
    }
}
