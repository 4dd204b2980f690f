//! Taskdeck Frontend App
//!
//! Root component: session, routing and screen dispatch.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{NavBar, ToastStack};
use crate::context::{AppContext, Toast};
use crate::route::Route;
use crate::screens::{
    CreateTaskScreen, ProfileScreen, SignInScreen, SignUpScreen, TaskDetailScreen, TasksScreen,
};
use crate::store::{load_session, SessionStore, SessionStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let session: SessionStore = Store::new(load_session());
    let route = signal(Route::from_location());
    let toasts = signal(Vec::<Toast>::new());
    let history_epoch = signal(0u32);

    let ctx = AppContext::new(route, toasts, history_epoch);

    // Provide context to all children
    provide_context(session);
    provide_context(ctx);

    // Browser back/forward
    let popstate = Closure::<dyn FnMut()>::new(move || {
        ctx.handle_popstate();
    });
    if let Some(window) = web_sys::window() {
        let result = window.add_event_listener_with_callback(
            "popstate",
            popstate.as_ref().unchecked_ref::<js_sys::Function>(),
        );
        if let Err(err) = result {
            web_sys::console::warn_1(&format!("[APP] popstate listener failed: {err:?}").into());
        }
    }
    popstate.forget();

    // Signed-out visitors only see the auth screens
    Effect::new(move |_| {
        let route = ctx.route.get();
        let signed_in = session.user().get().is_some();
        if route.requires_user() && !signed_in {
            ctx.redirect(Route::SignIn);
        }
    });

    view! {
        <div class="app-layout">
            <NavBar/>
            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::SignUp => view! { <SignUpScreen/> }.into_any(),
                    Route::SignIn => view! { <SignInScreen/> }.into_any(),
                    Route::Tasks => view! { <TasksScreen/> }.into_any(),
                    Route::CreateTask => view! { <CreateTaskScreen/> }.into_any(),
                    Route::TaskDetail(task_id) => {
                        view! { <TaskDetailScreen task_id=task_id/> }.into_any()
                    }
                    Route::Profile => view! { <ProfileScreen/> }.into_any(),
                }}
            </main>
            <ToastStack/>
        </div>
    }
}
