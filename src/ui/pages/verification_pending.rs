//! Shown after signup until the user clicks the emailed verification link.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::error::FormError;
use crate::core::forms::{EmailForm, Field, FieldErrors, SubmitState};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    ErrorMessage, FormField, SubmitButton, SuccessMessage, clear_field, field_error,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::AuthCard;

const RESENT: &str = "Verification email sent successfully. Please check your inbox.";

#[component]
pub fn VerificationPendingPage() -> impl IntoView {
    let auth = use_auth_context();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = EmailForm {
            email: email.get_untracked(),
        };
        let field_errors = form.validate_for_resend();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        state.set(SubmitState::InFlight);

        auth.run(move |client| async move {
            let result = form.submit_resend(&client).await;
            state.set(SubmitState::from_result(&result));
            if let Err(FormError::Invalid(field_errors)) = result {
                errors.set(field_errors);
            }
        });
    };

    let general_error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let loading = Signal::derive(move || state.with(SubmitState::is_in_flight));
    let sent = Signal::derive(move || {
        state.with(|s| (*s == SubmitState::Succeeded).then(|| RESENT.to_string()))
    });

    view! {
        <AuthCard
            title="Verify Your Email"
            subtitle="We've sent a verification link to your email address. Click it to activate your account."
        >
            <div class="flex justify-center mb-6">
                <div class="w-16 h-16 bg-blue-900/40 rounded-full flex items-center justify-center">
                    <Icon name=icons::MAIL class="w-8 h-8" />
                </div>
            </div>

            <div class="border-t border-b border-neutral-800 py-6 mb-6 space-y-4">
                <p class="text-sm text-neutral-400">
                    "Didn't receive the email? Check your spam folder or request a new link below."
                </p>
                <SuccessMessage message=sent />
                <Show when=move || sent.with(Option::is_none)>
                    <form on:submit=on_submit class="space-y-4" novalidate>
                        <ErrorMessage error=general_error />
                        <FormField
                            label="Email Address"
                            id="email"
                            input_type="email"
                            autocomplete="email"
                            placeholder="Enter your email address"
                            value=email
                            error=field_error(errors, Field::Email)
                            on_edit=clear_field(errors, Field::Email)
                        />
                        <SubmitButton
                            loading=loading
                            text="Resend Verification Email"
                            loading_text="Sending..."
                        />
                    </form>
                </Show>
            </div>

            <p class="text-center text-sm text-neutral-400">
                "Already verified your email? "
                <A href="/login" attr:class="text-blue-500 hover:text-blue-400 font-medium">"Sign in here"</A>
            </p>
        </AuthCard>
    }
}
