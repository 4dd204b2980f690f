//! Profile Screen
//!
//! Account overview plus sign out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{session_clear_user, use_session, SessionStoreFields};

/// Signed-in account overview
#[component]
pub fn ProfileScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let on_sign_out = move |_| {
        spawn_local(async move {
            // The local session clears whatever the backend says.
            if let Err(err) = api::sign_out().await {
                web_sys::console::warn_1(&format!("[PROFILE] sign out failed: {err}").into());
            }
            session_clear_user(&session);
            ctx.navigate(Route::SignIn);
        });
    };

    view! {
        <div class="profile-screen">
            <h1>"Profile"</h1>
            {move || {
                session.user().get().map(|user| view! {
                    <div class="profile-card">
                        <p class="profile-name">{user.username}</p>
                        <p class="profile-email">{user.email}</p>
                    </div>
                })
            }}
            <button class="btn danger" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
