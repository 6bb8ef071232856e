//! Session store: the single source of truth for "who is logged in".
//!
//! The store is a clonable handle over shared state. Only the auth client and
//! the bootstrap check mutate it; everything else reads snapshots. A
//! generation counter orders bootstrap responses against explicit auth
//! operations so a late bootstrap reply cannot resurrect a logged-out user.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

/// Current user as reported by the remote API.
///
/// Opaque beyond display: the API owns its validity. Fields this crate does
/// not know about are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserSummary {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UserSummary {
    /// Username, else email, else a generic label.
    pub fn display_name(&self) -> &str {
        [self.username.as_str(), self.email.as_str()]
            .into_iter()
            .find(|name| !name.trim().is_empty())
            .unwrap_or("User")
    }
}

/// Snapshot of the session state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Present iff the holder is authenticated
    pub user: Option<UserSummary>,
    /// True until the first bootstrap check settles, and while a check or
    /// any operation is in flight
    pub is_loading: bool,
    /// Message from the last failed operation
    pub last_error: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
            last_error: None,
        }
    }
}

/// Proof that a bootstrap check started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapTicket(u64);

/// Session plus the bookkeeping `is_loading` is derived from.
#[derive(Debug, Default)]
struct StoreState {
    session: Session,
    /// Generation of the newest bootstrap check still in flight
    pending_bootstrap: Option<u64>,
    in_flight: usize,
}

impl StoreState {
    /// Loading while a bootstrap check or any operation is outstanding.
    fn refresh_loading(&mut self) {
        self.session.is_loading = self.pending_bootstrap.is_some() || self.in_flight > 0;
    }
}

/// Shared handle to the session state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<StoreState>>,
    generation: Arc<AtomicU64>,
}

impl SessionStore {
    /// Creates an empty store that is still loading.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Session {
        self.read().session.clone()
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.read().session.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().session.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.read().session.is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().session.last_error.clone()
    }

    /// Stores the authenticated user. Invalidates any in-flight bootstrap.
    pub fn set_user(&self, user: UserSummary) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.write().session.user = Some(user);
    }

    /// Forgets the current user. Invalidates any in-flight bootstrap.
    pub fn clear_user(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.write().session.user = None;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.write().session.last_error = error;
    }

    /// Counts an auth operation as in flight.
    pub fn begin_operation(&self) {
        let mut state = self.write();
        state.in_flight += 1;
        state.refresh_loading();
    }

    /// Ends an operation started with `begin_operation`. The session keeps
    /// loading while a bootstrap check or another operation is pending.
    pub fn finish_operation(&self) {
        let mut state = self.write();
        state.in_flight = state.in_flight.saturating_sub(1);
        state.refresh_loading();
    }

    /// Marks the start of a bootstrap check. Supersedes older checks.
    pub fn begin_bootstrap(&self) -> BootstrapTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.write();
        state.pending_bootstrap = Some(generation);
        state.refresh_loading();
        BootstrapTicket(generation)
    }

    /// Applies a bootstrap result if nothing newer touched the session.
    ///
    /// Loading ends with the newest check, whether or not its result was
    /// applied. Returns whether the result was applied.
    pub fn finish_bootstrap(&self, ticket: BootstrapTicket, user: Option<UserSummary>) -> bool {
        let mut state = self.write();
        if state.pending_bootstrap == Some(ticket.0) {
            state.pending_bootstrap = None;
            state.refresh_loading();
        }

        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            tracing::debug!("Discarding stale bootstrap result");
            return false;
        }

        state.session.user = user;
        true
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserSummary {
        UserSummary {
            id: format!("id-{name}"),
            username: name.to_string(),
            email: format!("{name}@example.com"),
            role: "student".to_string(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_new_store_is_loading_and_empty() {
        let store = SessionStore::new();
        let session = store.snapshot();
        assert!(session.is_loading);
        assert!(session.user.is_none());
        assert!(session.last_error.is_none());
    }

    #[test]
    fn test_set_and_clear_user() {
        let store = SessionStore::new();
        store.set_user(user("ada"));
        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().username, "ada");

        store.clear_user();
        assert!(!store.is_authenticated());
        store.clear_user();
        assert!(store.user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let view = store.clone();
        store.set_user(user("ada"));
        assert!(view.is_authenticated());
    }

    #[test]
    fn test_bootstrap_applies_when_current() {
        let store = SessionStore::new();
        let ticket = store.begin_bootstrap();
        assert!(store.finish_bootstrap(ticket, Some(user("ada"))));
        assert!(!store.is_loading());
        assert_eq!(store.user().unwrap().username, "ada");
    }

    #[test]
    fn test_late_bootstrap_does_not_override_logout() {
        let store = SessionStore::new();
        let ticket = store.begin_bootstrap();

        store.clear_user();

        assert!(!store.finish_bootstrap(ticket, Some(user("ada"))));
        assert!(store.user().is_none());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_late_bootstrap_does_not_override_login() {
        let store = SessionStore::new();
        let ticket = store.begin_bootstrap();

        store.set_user(user("grace"));

        assert!(!store.finish_bootstrap(ticket, None));
        assert_eq!(store.user().unwrap().username, "grace");
    }

    #[test]
    fn test_only_latest_bootstrap_applies() {
        let store = SessionStore::new();
        let first = store.begin_bootstrap();
        let second = store.begin_bootstrap();

        assert!(store.finish_bootstrap(second, Some(user("new"))));
        assert!(!store.finish_bootstrap(first, Some(user("old"))));
        assert_eq!(store.user().unwrap().username, "new");
    }

    #[test]
    fn test_operation_ending_during_bootstrap_keeps_loading() {
        let store = SessionStore::new();
        let ticket = store.begin_bootstrap();

        store.begin_operation();
        store.finish_operation();
        assert!(store.is_loading());

        assert!(store.finish_bootstrap(ticket, Some(user("ada"))));
        assert!(!store.is_loading());
        assert_eq!(store.user().unwrap().username, "ada");
    }

    #[test]
    fn test_overlapping_operations_keep_loading_until_last_finishes() {
        let store = SessionStore::new();
        store.begin_operation();
        store.begin_operation();

        store.finish_operation();
        assert!(store.is_loading());
        store.finish_operation();
        assert!(!store.is_loading());

        // Unbalanced finish does not underflow
        store.finish_operation();
        assert!(!store.is_loading());
    }

    #[test]
    fn test_superseded_bootstrap_leaves_newer_check_loading() {
        let store = SessionStore::new();
        let first = store.begin_bootstrap();
        let second = store.begin_bootstrap();

        assert!(!store.finish_bootstrap(first, Some(user("old"))));
        assert!(store.is_loading());

        assert!(store.finish_bootstrap(second, None));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_user_summary_accepts_mongo_id_and_keeps_extra_fields() {
        let json = r#"{"_id":"65f0","username":"ada","email":"ada@example.com","role":"instructor","isVerified":true}"#;
        let parsed: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "65f0");
        assert_eq!(parsed.role, "instructor");
        assert_eq!(parsed.extra.get("isVerified"), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut user = UserSummary {
            email: "ada@example.com".to_string(),
            ..UserSummary::default()
        };
        assert_eq!(user.display_name(), "ada@example.com");
        user.username = "ada".to_string();
        assert_eq!(user.display_name(), "ada");
        assert_eq!(UserSummary::default().display_name(), "User");
    }
}
