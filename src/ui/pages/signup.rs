//! Signup page component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::error::FormError;
use crate::core::forms::{Field, FieldErrors, SignupForm, SubmitState};
use crate::core::validation::{PasswordStrength, password_strength};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, clear_field, field_error};
use crate::ui::layout::AuthCard;

/// Bar color for a strength score of 0 to 4
fn strength_color(score: u8) -> &'static str {
    match score {
        0 => "bg-red-500",
        1 => "bg-orange-500",
        2 => "bg-yellow-500",
        3 => "bg-blue-500",
        _ => "bg-green-500",
    }
}

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth_context();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            ..SignupForm::default()
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
            let result = form.submit(&client).await;
            state.set(SubmitState::from_result(&result));
            match result {
                Ok(registered) => navigate(registered.redirect.path(), Default::default()),
                Err(FormError::Invalid(field_errors)) => errors.set(field_errors),
                Err(FormError::Failed(_)) => {}
            }
        });
    };

    let score = Memo::new(move |_| password.with(|p| password_strength(p)));
    let general_error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let loading = Signal::derive(move || state.with(SubmitState::is_in_flight));

    view! {
        <AuthCard title="Join Cognify" subtitle="Create an account to start learning">
            <form on:submit=on_submit class="space-y-4" novalidate>
                <ErrorMessage error=general_error />

                <FormField
                    label="Username"
                    id="username"
                    autocomplete="username"
                    placeholder="johndoe"
                    value=username
                    error=field_error(errors, Field::Username)
                    on_edit=clear_field(errors, Field::Username)
                />
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
                    label="Phone Number"
                    id="phone"
                    input_type="tel"
                    autocomplete="tel"
                    placeholder="+1 555 123 4567"
                    value=phone
                    error=field_error(errors, Field::Phone)
                    on_edit=clear_field(errors, Field::Phone)
                />
                <FormField
                    label="Password"
                    id="password"
                    input_type="password"
                    autocomplete="new-password"
                    placeholder="••••••••"
                    value=password
                    error=field_error(errors, Field::Password)
                    on_edit=clear_field(errors, Field::Password)
                />

                <Show when=move || password.with(|p| !p.is_empty())>
                    <div class="space-y-1">
                        <div class="flex gap-1">
                            {(1..=4u8)
                                .map(|segment| {
                                    view! {
                                        <div class=move || {
                                            let score = score.get();
                                            let fill = if segment <= score.max(1) {
                                                strength_color(score)
                                            } else {
                                                "bg-neutral-800"
                                            };
                                            format!("h-1.5 flex-1 rounded-full {fill}")
                                        } />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p class="text-xs text-neutral-400">
                            "Password strength: "
                            {move || PasswordStrength::from_score(score.get()).to_string()}
                        </p>
                    </div>
                </Show>

                <FormField
                    label="Confirm Password"
                    id="confirm_password"
                    input_type="password"
                    autocomplete="new-password"
                    placeholder="••••••••"
                    value=confirm_password
                    error=field_error(errors, Field::ConfirmPassword)
                    on_edit=clear_field(errors, Field::ConfirmPassword)
                />

                <SubmitButton loading=loading text="Sign up" loading_text="Creating account..." />

                <p class="text-center text-sm text-neutral-400">
                    "Already have an account? "
                    <A href="/login" attr:class="text-blue-500 hover:text-blue-400 font-medium">"Log in"</A>
                </p>
            </form>
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_colors_progress() {
        assert_eq!(strength_color(0), "bg-red-500");
        assert_eq!(strength_color(2), "bg-yellow-500");
        assert_eq!(strength_color(4), "bg-green-500");
        assert_eq!(strength_color(9), "bg-green-500");
    }
}
