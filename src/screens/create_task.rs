//! Create Task Screen
//!
//! New task form: name, priority and an optional deadline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskArgs};
use crate::context::AppContext;
use crate::models::{parse_date_input, TaskPriority};
use crate::route::Route;

/// New task form
#[component]
pub fn CreateTaskScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::Normal);
    let (due, set_due) = signal(String::new());
    let (name_error, set_name_error) = signal(Option::<&'static str>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            set_name_error.set(Some("Task name is required"));
            return;
        }
        set_name_error.set(None);

        let priority = priority.get();
        let due = parse_date_input(&due.get());

        set_submitting.set(true);
        spawn_local(async move {
            let args = CreateTaskArgs {
                name: &name,
                priority,
                due,
            };
            match api::create_task(&args).await {
                Ok(outcome) => {
                    ctx.toast_success(outcome.message);
                    ctx.navigate(Route::Tasks);
                }
                Err(err) => {
                    set_submitting.set(false);
                    ctx.toast_error(err.user_message());
                }
            }
        });
    };

    let on_priority = move |ev: web_sys::Event| {
        if let Some(value) = TaskPriority::from_param(&event_target_value(&ev)) {
            set_priority.set(value);
        }
    };

    view! {
        <div class="task-form-screen">
            <h1>"Create New Task"</h1>
            <form on:submit=on_submit>
                <div class="field">
                    <label>"Name"</label>
                    <input
                        type="text"
                        placeholder="task name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            set_name.set(event_target_value(&ev));
                            set_name_error.set(None);
                        }
                    />
                    {move || name_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <div class="field">
                    <label>"Priority"</label>
                    <select prop:value=move || priority.get().as_str() on:change=on_priority>
                        <option value="normal">"Normal"</option>
                        <option value="urgent">"Urgent"</option>
                    </select>
                </div>
                <div class="field">
                    <label>"Due Date"</label>
                    <input
                        type="date"
                        prop:value=move || due.get()
                        on:input=move |ev| set_due.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || submitting.get()>
                    "Create"
                </button>
            </form>
        </div>
    }
}
