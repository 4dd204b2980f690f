//! Application Context
//!
//! Navigation and notifications shared via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::route::{self, Route};

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
    /// Live notifications - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Live notifications - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Bumped on every back/forward navigation - read
    pub history_epoch: ReadSignal<u32>,
    set_history_epoch: WriteSignal<u32>,
    toast_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        history_epoch: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            history_epoch: history_epoch.0,
            set_history_epoch: history_epoch.1,
            toast_seq: StoredValue::new(0),
        }
    }

    /// Go to a screen, adding a history entry.
    pub fn navigate(&self, route: Route) {
        route::push_history(&route);
        self.set_route.set(route);
    }

    /// Go to a screen without adding a history entry.
    pub fn redirect(&self, route: Route) {
        route::replace_history(&route);
        self.set_route.set(route);
    }

    /// React to browser back/forward.
    pub fn handle_popstate(&self) {
        let current = Route::from_location();
        if current != self.route.get_untracked() {
            self.set_route.set(current);
        }
        self.set_history_epoch.update(|v| *v += 1);
    }

    pub fn toast_success(&self, text: impl Into<String>) {
        self.push_toast(ToastKind::Success, text.into());
    }

    pub fn toast_error(&self, text: impl Into<String>) {
        self.push_toast(ToastKind::Error, text.into());
    }

    fn push_toast(&self, kind: ToastKind, text: String) {
        let id = self.toast_seq.get_value() + 1;
        self.toast_seq.set_value(id);
        self.set_toasts
            .update(|toasts| toasts.push(Toast { id, kind, text }));
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}
