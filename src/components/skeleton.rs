//! Skeleton Components
//!
//! Gray placeholders shown while the list or a single task loads.

use leptos::prelude::*;

use super::pagination::PAGE_SIZE;

/// Placeholder table, one row per slot on a page
#[component]
pub fn TasksSkeleton() -> impl IntoView {
    view! {
        <div class="task-skeleton">
            {(0..PAGE_SIZE)
                .map(|_| view! { <div class="skeleton-row"></div> })
                .collect_view()}
        </div>
    }
}

/// Placeholder form, one bar per editable field
#[component]
pub fn TaskFormSkeleton() -> impl IntoView {
    view! {
        <div class="form-skeleton">
            {(0..4)
                .map(|_| view! { <div class="skeleton-row"></div> })
                .collect_view()}
        </div>
    }
}
