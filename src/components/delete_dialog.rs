//! Delete Dialog Component
//!
//! Modal confirmation shown before a task is removed.

use leptos::prelude::*;

/// Two-button confirmation dialog. Clicking the backdrop cancels.
#[component]
pub fn DeleteDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete Task"</h2>
                    <p>"Are you sure? You can't undo this action afterwards."</p>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn danger" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
