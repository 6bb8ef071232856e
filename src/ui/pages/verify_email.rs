//! Email verification page for the `/verify-email/:token` link
//!
//! Verifies on mount, then sends the user to login after a short pause.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::auth::{EMAIL_VERIFIED_MESSAGE, Redirect};
use crate::ui::auth::use_auth_context;
use crate::ui::common::LoadingSpinner;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::AuthCard;

/// Delay before the automatic redirect to login
const REDIRECT_DELAY_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
enum Verification {
    Pending,
    Verified(String),
    Failed(String),
}

#[cfg(feature = "hydrate")]
async fn pause(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(feature = "hydrate"))]
async fn pause(_ms: u32) {}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth_context();
    let params = use_params_map();
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());

    let status = RwSignal::new(Verification::Pending);

    Effect::new(move |_| {
        let token = token.get();
        let navigate = use_navigate();
        auth.run(move |client| async move {
            match client.verify_email(&token).await {
                Ok(notice) => {
                    status.set(Verification::Verified(
                        notice.message_or(EMAIL_VERIFIED_MESSAGE).to_string(),
                    ));
                    pause(REDIRECT_DELAY_MS).await;
                    let redirect = notice.redirect.unwrap_or(Redirect::Login);
                    navigate(redirect.path(), NavigateOptions::default());
                }
                Err(failure) => status.set(Verification::Failed(failure.message().to_string())),
            }
        });
    });

    view! {
        {move || match status.get() {
            Verification::Pending => view! {
                <AuthCard title="Verifying Your Email">
                    <LoadingSpinner label="Please wait while we verify your email address..." />
                </AuthCard>
            }
            .into_any(),
            Verification::Verified(message) => view! {
                <AuthCard title="Email Verified!">
                    <div class="space-y-4 text-center">
                        <div class="w-16 h-16 mx-auto bg-green-900/40 rounded-full flex items-center justify-center">
                            <Icon name=icons::CHECK class="w-8 h-8" />
                        </div>
                        <p class="text-neutral-400">{message}</p>
                        <p class="text-sm text-neutral-500">"Redirecting you to login..."</p>
                        <A href="/login" attr:class="text-blue-500 hover:text-blue-400 font-medium">
                            "Go to login now"
                        </A>
                    </div>
                </AuthCard>
            }
            .into_any(),
            Verification::Failed(message) => view! {
                <AuthCard title="Verification Failed">
                    <div class="space-y-4 text-center">
                        <p class="text-neutral-400">{message}</p>
                        <A
                            href="/verification-pending"
                            attr:class="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                        >
                            "Request a new link"
                        </A>
                    </div>
                </AuthCard>
            }
            .into_any(),
        }}
    }
}
