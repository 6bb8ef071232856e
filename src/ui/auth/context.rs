//! Auth context shared by every page
//!
//! Mirrors the `SessionStore` owned by the `AuthClient` into a reactive
//! signal. Operations run on the client and the signal is resynced after
//! each one, so components only ever read `session`.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::auth::Redirect;
use crate::core::storage::KeyValueStore;
use crate::core::{AuthClient, Session, UserSummary};

/// Auth context providing the session and the client that mutates it
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Snapshot of the session store, refreshed after every operation
    pub session: RwSignal<Session>,
    client: StoredValue<Option<AuthClient>>,
}

impl AuthContext {
    pub fn user(&self) -> Option<UserSummary> {
        self.session.with(|session| session.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|session| session.is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.session.with(|session| session.last_error.clone())
    }

    /// Copies the store into the signal.
    pub fn sync(&self) {
        if let Some(client) = self.client.get_value() {
            self.session.set(client.session().snapshot());
        }
    }

    /// Runs an auth operation in the background and resyncs afterwards.
    /// Does nothing while rendering on the server.
    pub fn run<F, Fut>(self, operation: F)
    where
        F: FnOnce(AuthClient) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(client) = self.client.get_value() else {
            return;
        };
        self.session.update(|session| {
            session.is_loading = true;
            session.last_error = None;
        });
        spawn_local(async move {
            operation(client).await;
            self.sync();
        });
    }

    pub fn logout(self) {
        let navigate = use_navigate();
        self.run(move |client| async move {
            // Home either way; the session is already cleared.
            let redirect = client.logout().await.unwrap_or(Redirect::Home);
            navigate(redirect.path(), NavigateOptions::default());
        });
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Same initial state on server and client to avoid a hydration mismatch
    let session = RwSignal::new(Session::default());
    let client = StoredValue::new(browser_client());

    let ctx = AuthContext { session, client };

    // Check the session cookie once, after hydration
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(client) = ctx.client.get_value() {
            spawn_local(async move {
                client.bootstrap().await;
                ctx.sync();
            });
        }
    });

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(feature = "hydrate")]
fn browser_client() -> Option<AuthClient> {
    let config = crate::core::ApiConfig::load();
    tracing::debug!("Using auth API at {}", config.api_base_url);
    Some(AuthClient::browser(&config))
}

#[cfg(not(feature = "hydrate"))]
fn browser_client() -> Option<AuthClient> {
    None
}

/// Durable store for small preferences such as the remembered email
#[cfg(feature = "hydrate")]
pub fn preference_store() -> Box<dyn KeyValueStore> {
    Box::new(crate::core::storage::LocalStore)
}

#[cfg(not(feature = "hydrate"))]
pub fn preference_store() -> Box<dyn KeyValueStore> {
    Box::new(crate::core::storage::MemoryStore::new())
}
