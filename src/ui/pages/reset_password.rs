//! Reset-password page, reached from the emailed `/reset-password/:token` link
//!
//! The token is checked against the API on mount. An invalid or expired
//! token shows a dead-end card pointing back to the forgot-password page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::error::FormError;
use crate::core::forms::{Field, FieldErrors, ResetPasswordForm, SubmitState};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    ErrorMessage, FormField, LoadingSpinner, SubmitButton, clear_field, field_error,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::AuthCard;

#[derive(Debug, Clone, PartialEq)]
enum TokenCheck {
    Checking,
    Valid,
    Invalid(String),
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth_context();
    let params = use_params_map();
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());

    let check = RwSignal::new(TokenCheck::Checking);

    Effect::new(move |_| {
        let token = token.get();
        check.set(TokenCheck::Checking);
        auth.run(move |client| async move {
            let outcome = match client.validate_reset_token(&token).await {
                Ok(_) => TokenCheck::Valid,
                Err(failure) => TokenCheck::Invalid(failure.message().to_string()),
            };
            check.set(outcome);
        });
    });

    view! {
        {move || match check.get() {
            TokenCheck::Checking => view! {
                <AuthCard title="Reset your password">
                    <LoadingSpinner label="Checking your reset link..." />
                </AuthCard>
            }
            .into_any(),
            TokenCheck::Invalid(reason) => view! {
                <AuthCard title="Invalid or Expired Link">
                    <div class="space-y-4 text-center">
                        <p class="text-sm text-neutral-400">{reason}</p>
                        <A
                            href="/forgot-password"
                            attr:class="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                        >
                            "Request a new link"
                        </A>
                    </div>
                </AuthCard>
            }
            .into_any(),
            TokenCheck::Valid => view! { <NewPasswordForm token=token.get_untracked() /> }.into_any(),
        }}
    }
}

#[component]
fn NewPasswordForm(token: String) -> impl IntoView {
    let auth = use_auth_context();
    let token = StoredValue::new(token);

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let field_errors = form.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        state.set(SubmitState::InFlight);

        let token = token.get_value();
        auth.run(move |client| async move {
            let result = form.submit(&client, &token).await;
            state.set(SubmitState::from_result(&result));
            if let Err(FormError::Invalid(field_errors)) = result {
                errors.set(field_errors);
            }
        });
    };

    let general_error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let loading = Signal::derive(move || state.with(SubmitState::is_in_flight));
    let succeeded = move || state.with(|s| *s == SubmitState::Succeeded);

    view! {
        <Show
            when=succeeded
            fallback=move || view! {
                <AuthCard title="Reset your password" subtitle="Choose a new password for your account">
                    <form on:submit=on_submit class="space-y-5" novalidate>
                        <ErrorMessage error=general_error />
                        <FormField
                            label="New Password"
                            id="password"
                            input_type="password"
                            autocomplete="new-password"
                            placeholder="••••••••"
                            value=password
                            error=field_error(errors, Field::Password)
                            on_edit=clear_field(errors, Field::Password)
                        />
                        <FormField
                            label="Confirm New Password"
                            id="confirm_password"
                            input_type="password"
                            autocomplete="new-password"
                            placeholder="••••••••"
                            value=confirm_password
                            error=field_error(errors, Field::ConfirmPassword)
                            on_edit=clear_field(errors, Field::ConfirmPassword)
                        />
                        <SubmitButton loading=loading text="Reset password" loading_text="Resetting..." />
                    </form>
                </AuthCard>
            }
        >
            <AuthCard title="Password Reset Successful">
                <div class="space-y-4 text-center">
                    <div class="w-12 h-12 mx-auto rounded-full bg-green-900/40 flex items-center justify-center">
                        <Icon name=icons::CHECK class="w-6 h-6" />
                    </div>
                    <p class="text-sm text-neutral-400">"You can now log in with your new password."</p>
                    <A
                        href="/login"
                        attr:class="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                    >
                        "Go to login"
                    </A>
                </div>
            </AuthCard>
        </Show>
    }
}
