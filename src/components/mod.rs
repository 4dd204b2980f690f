//! UI Components
//!
//! Reusable Leptos components.

mod delete_dialog;
mod nav_bar;
mod pagination;
mod skeleton;
mod task_table;
mod toast;

pub use delete_dialog::DeleteDialog;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use skeleton::{TaskFormSkeleton, TasksSkeleton};
pub use task_table::TaskTable;
pub use toast::ToastStack;
