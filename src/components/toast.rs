//! Toast Stack Component
//!
//! Transient success/error notifications.

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

/// Renders the live toasts from context
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! { <div class=class>{toast.text.clone()}</div> }
                }
            />
        </div>
    }
}
