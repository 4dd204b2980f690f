//! Tasks Screen
//!
//! The task list: status filter, sortable columns, pagination and
//! per-row deletion with a confirmation dialog. Query state lives in
//! the URL; the fetcher reacts to it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{DeleteDialog, Pagination, TaskTable, TasksSkeleton};
use crate::context::AppContext;
use crate::models::{MessageResponse, TaskPage, TaskStatus};
use crate::query::QueryStore;
use crate::route::Route;
use crate::store::{use_session, SessionStoreFields};

/// A response may only be applied while no newer request exists.
fn response_is_current(issued: u64, latest: u64) -> bool {
    issued == latest
}

/// Screen state after a delete settles: the row goes only on success,
/// while the dialog and pending id reset regardless of the outcome.
#[derive(Debug, PartialEq, Eq)]
struct DeleteSettled {
    removed_id: Option<String>,
    pending: Option<String>,
    dialog_open: bool,
}

fn settle_delete(task_id: &str, result: &Result<MessageResponse, ApiError>) -> DeleteSettled {
    DeleteSettled {
        removed_id: result.is_ok().then(|| task_id.to_owned()),
        pending: None,
        dialog_open: false,
    }
}

/// Task list screen
#[component]
pub fn TasksScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let query = QueryStore::mount();

    // None until the first successful fetch, which keeps the skeleton up.
    let (page_data, set_page_data) = signal(Option::<TaskPage>::None);
    let (pending_delete, set_pending_delete) = signal(Option::<String>::None);
    let (confirm_open, set_confirm_open) = signal(false);
    let fetch_seq = StoredValue::new(0u64);

    // Browser back/forward moves the URL under us.
    Effect::new(move |_| {
        ctx.history_epoch.get();
        query.resync();
    });

    // Refetch whenever the query state or the signed-in user changes.
    // Responses carry the sequence number they were issued under, so a
    // slow reply can never overwrite a newer one.
    Effect::new(move |_| {
        let state = query.state.get();
        let Some(user) = session.user().get() else {
            return;
        };
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);
        web_sys::console::log_1(&format!("[TASKS] fetch seq={seq} query={state:?}").into());

        spawn_local(async move {
            match api::list_tasks(&user.id, &state.to_query_string()).await {
                Ok(page) => match fetch_seq.try_get_value() {
                    Some(latest) if response_is_current(seq, latest) => {
                        set_page_data.set(Some(page));
                    }
                    _ => {
                        web_sys::console::log_1(
                            &format!("[TASKS] dropping stale response seq={seq}").into(),
                        );
                    }
                },
                Err(err) => {
                    web_sys::console::warn_1(&format!("[TASKS] list fetch failed: {err}").into());
                }
            }
        });
    });

    let on_sort = Callback::new(move |key| query.set_order_by(key));
    let on_page = Callback::new(move |page| query.set_page(page));
    let on_delete = Callback::new(move |task_id: String| {
        set_pending_delete.set(Some(task_id));
        set_confirm_open.set(true);
    });
    let on_cancel = Callback::new(move |_| {
        set_pending_delete.set(None);
        set_confirm_open.set(false);
    });
    let on_confirm = Callback::new(move |_| {
        let Some(task_id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = api::delete_task(&task_id).await;
            let settled = settle_delete(&task_id, &result);
            match result {
                Ok(outcome) => ctx.toast_success(outcome.message),
                Err(err) => ctx.toast_error(err.user_message()),
            }
            if let Some(removed) = settled.removed_id {
                set_page_data.update(|page| {
                    if let Some(page) = page {
                        page.remove_task(&removed);
                    }
                });
            }
            set_pending_delete.set(settled.pending);
            set_confirm_open.set(settled.dialog_open);
        });
    });

    let on_filter = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        query.set_status(TaskStatus::from_param(&value));
    };

    let tasks = Signal::derive(move || {
        page_data.get().map(|page| page.tasks).unwrap_or_default()
    });
    let task_count = Signal::derive(move || {
        page_data.get().map(|page| page.task_count).unwrap_or(0)
    });
    let order_by = Signal::derive(move || query.state.get().order_by);
    let current_page = Signal::derive(move || query.state.get().page);

    view! {
        <Show
            when=move || page_data.get().is_some()
            fallback=|| view! { <TasksSkeleton/> }
        >
            <div class="tasks-screen">
                <h1>"Tasks to do"</h1>
                <div class="list-toolbar">
                    <select
                        prop:value=move || {
                            query
                                .state
                                .get()
                                .status
                                .map(|status| status.as_str().to_string())
                                .unwrap_or_default()
                        }
                        on:change=on_filter
                    >
                        <option value="">"All"</option>
                        <option value="open">"Open"</option>
                        <option value="done">"Done"</option>
                    </select>
                    <button class="btn create" on:click=move |_| ctx.navigate(Route::CreateTask)>
                        "Create New Task"
                    </button>
                </div>
                <TaskTable tasks=tasks order_by=order_by on_sort=on_sort on_delete=on_delete/>
                <Pagination item_count=task_count current_page=current_page on_page=on_page/>
                <DeleteDialog open=confirm_open on_confirm=on_confirm on_cancel=on_cancel/>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_response_is_dropped() {
        assert!(response_is_current(3, 3));
        assert!(!response_is_current(2, 3));
    }

    #[test]
    fn test_delete_success_drops_row_and_clears_selection() {
        let result = Ok(MessageResponse {
            message: "Task deleted successfully".to_string(),
        });
        let settled = settle_delete("64a1", &result);
        assert_eq!(settled.removed_id.as_deref(), Some("64a1"));
        assert_eq!(settled.pending, None);
        assert!(!settled.dialog_open);
    }

    #[test]
    fn test_delete_failure_keeps_rows_but_clears_selection() {
        let result = Err(ApiError::Transport("failed to fetch".to_string()));
        let settled = settle_delete("64a1", &result);
        assert_eq!(settled.removed_id, None);
        assert_eq!(settled.pending, None);
        assert!(!settled.dialog_open);
    }
}
