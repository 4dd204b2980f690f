//! Screens
//!
//! One component per routed view.

mod create_task;
mod profile;
mod signin;
mod signup;
mod task_detail;
mod tasks;

pub use create_task::CreateTaskScreen;
pub use profile::ProfileScreen;
pub use signin::SignInScreen;
pub use signup::SignUpScreen;
pub use task_detail::TaskDetailScreen;
pub use tasks::TasksScreen;
