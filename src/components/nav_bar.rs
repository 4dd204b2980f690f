//! Nav Bar Component
//!
//! Top navigation, aware of whether someone is signed in.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;
use crate::store::{use_session, SessionStoreFields};

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let signed_in = move || session.user().get().is_some();

    let tasks_class = move || {
        let on_tasks = matches!(
            ctx.route.get(),
            Route::Tasks | Route::CreateTask | Route::TaskDetail(_)
        );
        if on_tasks { "nav-link active" } else { "nav-link" }
    };
    let profile_class = move || {
        if ctx.route.get() == Route::Profile { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="nav-bar">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Tasks)>
                "Taskdeck"
            </button>
            <nav>
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <button class="nav-link" on:click=move |_| ctx.navigate(Route::SignIn)>
                                "Sign in"
                            </button>
                            <button class="nav-link" on:click=move |_| ctx.navigate(Route::SignUp)>
                                "Register"
                            </button>
                        }
                    }
                >
                    <button class=tasks_class on:click=move |_| ctx.navigate(Route::Tasks)>
                        "Tasks"
                    </button>
                    <button class=profile_class on:click=move |_| ctx.navigate(Route::Profile)>
                        "Profile"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
