//! Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity, with the
//! signed-in user rehydrated from browser local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

const STORAGE_KEY: &str = "taskdeck.user";

/// Session state, set on login and cleared on logout
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Signed-in user, `None` while logged out
    pub user: Option<User>,
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Initial session state, rehydrated from local storage when present.
pub fn load_session() -> Session {
    Session {
        user: load_persisted_user(),
    }
}

// ========================
// Store Helper Functions
// ========================

/// Record a signed-in user. Storage is written before the reactive
/// update so a reload mid-navigation still sees the session.
pub fn session_set_user(store: &SessionStore, user: User) {
    persist_user(Some(&user));
    *store.user().write() = Some(user);
}

/// Drop the session locally, storage first.
pub fn session_clear_user(store: &SessionStore) {
    persist_user(None);
    *store.user().write() = None;
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_persisted_user() -> Option<User> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn persist_user(user: Option<&User>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match user {
        Some(user) => match serde_json::to_string(user) {
            Ok(raw) => storage.set_item(STORAGE_KEY, &raw),
            Err(_) => return,
        },
        None => storage.remove_item(STORAGE_KEY),
    };
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[STORE] session persist failed: {err:?}").into());
    }
}
