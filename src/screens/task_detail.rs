//! Task Detail Screen
//!
//! Loads one task and lets its fields be edited and saved.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UpdateTaskArgs};
use crate::components::TaskFormSkeleton;
use crate::context::AppContext;
use crate::models::{format_date_input, parse_date_input, Task, TaskPriority, TaskStatus};
use crate::route::Route;

/// Edit screen for one task
#[component]
pub fn TaskDetailScreen(task_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let task_id = StoredValue::new(task_id);

    let (task, set_task) = signal(Option::<Task>::None);
    let (name, set_name) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::Normal);
    let (status, set_status) = signal(TaskStatus::Open);
    let (due, set_due) = signal(String::new());
    let (name_error, set_name_error) = signal(Option::<&'static str>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let task_id = task_id.get_value();
        spawn_local(async move {
            match api::get_task(&task_id).await {
                Ok(loaded) => {
                    set_name.set(loaded.name.clone());
                    set_priority.set(loaded.priority);
                    set_status.set(loaded.status);
                    set_due.set(loaded.due.as_ref().map(format_date_input).unwrap_or_default());
                    set_task.set(Some(loaded));
                }
                Err(err) => ctx.toast_error(err.user_message()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            set_name_error.set(Some("Task name is required"));
            return;
        }
        set_name_error.set(None);

        let task_id = task_id.get_value();
        let priority = priority.get();
        let status = status.get();
        let due = parse_date_input(&due.get());

        set_submitting.set(true);
        spawn_local(async move {
            let args = UpdateTaskArgs {
                name: &name,
                priority,
                status,
                due,
            };
            match api::update_task(&task_id, &args).await {
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
    let on_status = move |ev: web_sys::Event| {
        if let Some(value) = TaskStatus::from_param(&event_target_value(&ev)) {
            set_status.set(value);
        }
    };

    view! {
        <div class="task-form-screen">
            <Show
                when=move || task.get().is_some()
                fallback=|| view! { <TaskFormSkeleton/> }
            >
                <h1>"Edit Task"</h1>
                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Name"</label>
                        <input
                            type="text"
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
                        <label>"Status"</label>
                        <select prop:value=move || status.get().as_str() on:change=on_status>
                            <option value="open">"Open"</option>
                            <option value="done">"Done"</option>
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
                        "Save"
                    </button>
                </form>
            </Show>
        </div>
    }
}
