//! Task Table Component
//!
//! Sortable task rows with a per-row delete affordance. Owns no state;
//! every interaction is reported upward through callbacks.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{format_date_human, Task, TaskPriority, TaskStatus};
use crate::query::SortKey;
use crate::route::Route;

/// Column headers in display order, with their backend sort keys.
const COLUMNS: [(SortKey, &str); 4] = [
    (SortKey::Name, "Task"),
    (SortKey::Priority, "Priority"),
    (SortKey::Status, "Status"),
    (SortKey::Due, "Due Date"),
];

/// Task list table
#[component]
pub fn TaskTable(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] order_by: Signal<Option<SortKey>>,
    #[prop(into)] on_sort: Callback<SortKey>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    {COLUMNS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <th on:click=move |_| on_sort.run(key)>
                                    {label}
                                    <Show when=move || order_by.get() == Some(key)>
                                        <span class="sort-marker">"▲"</span>
                                    </Show>
                                </th>
                            }
                        })
                        .collect_view()}
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || tasks.get()
                    key=|task| task.id.clone()
                    children=move |task| {
                        let id = task.id.clone();
                        let delete_id = task.id.clone();
                        let href = Route::TaskDetail(id.clone()).to_path();
                        let priority_class = match task.priority {
                            TaskPriority::Urgent => "badge urgent",
                            TaskPriority::Normal => "badge normal",
                        };
                        let status_class = match task.status {
                            TaskStatus::Open => "badge open",
                            TaskStatus::Done => "badge done",
                        };
                        let due = task.due.as_ref().map(format_date_human).unwrap_or_default();

                        view! {
                            <tr>
                                <td>
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            ctx.navigate(Route::TaskDetail(id.clone()));
                                        }
                                    >
                                        {task.name.clone()}
                                    </a>
                                </td>
                                <td>
                                    <span class=priority_class>{task.priority.as_str()}</span>
                                </td>
                                <td>
                                    <span class=status_class>{task.status.as_str()}</span>
                                </td>
                                <td>{due}</td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| on_delete.run(delete_id.clone())
                                    >
                                        "🗑"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
