//! Client Routing
//!
//! Path codec plus History API helpers for moving between screens.

use wasm_bindgen::JsValue;

/// Screens reachable from the address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignUp,
    SignIn,
    Tasks,
    CreateTask,
    TaskDetail(String),
    Profile,
}

impl Route {
    /// Map a pathname to a screen. Unknown paths land on the task list.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/tasks" => Route::Tasks,
            "/signup" => Route::SignUp,
            "/signin" => Route::SignIn,
            "/create-task" => Route::CreateTask,
            "/profile" => Route::Profile,
            _ => match path.strip_prefix("/tasks/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::TaskDetail(id.to_string())
                }
                _ => Route::Tasks,
            },
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::SignUp => "/signup".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::Tasks => "/tasks".to_string(),
            Route::CreateTask => "/create-task".to_string(),
            Route::TaskDetail(id) => format!("/tasks/{id}"),
            Route::Profile => "/profile".to_string(),
        }
    }

    /// Everything except the auth screens needs a signed-in user.
    pub fn requires_user(&self) -> bool {
        !matches!(self, Route::SignUp | Route::SignIn)
    }

    /// Current screen according to the browser location.
    pub fn from_location() -> Self {
        let Some(window) = web_sys::window() else {
            return Route::Tasks;
        };
        match window.location().pathname() {
            Ok(path) => Route::from_path(&path),
            Err(_) => Route::Tasks,
        }
    }
}

/// Push a new history entry for `route`.
pub fn push_history(route: &Route) {
    write_history(route, false);
}

/// Replace the current history entry, used for auth redirects.
pub fn replace_history(route: &Route) {
    write_history(route, true);
}

fn write_history(route: &Route, replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = route.to_path();
    let result = window.history().and_then(|history| {
        if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(&path))
        }
    });
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[ROUTE] history write failed: {err:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths_round_trip() {
        let routes = [
            Route::SignUp,
            Route::SignIn,
            Route::Tasks,
            Route::CreateTask,
            Route::Profile,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_root_and_unknown_fall_back_to_tasks() {
        assert_eq!(Route::from_path(""), Route::Tasks);
        assert_eq!(Route::from_path("/"), Route::Tasks);
        assert_eq!(Route::from_path("/nope"), Route::Tasks);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/profile/"), Route::Profile);
        assert_eq!(Route::from_path("/tasks/"), Route::Tasks);
    }

    #[test]
    fn test_detail_route_captures_id() {
        assert_eq!(
            Route::from_path("/tasks/665f1c2e8b3e4a0012ab34cd"),
            Route::TaskDetail("665f1c2e8b3e4a0012ab34cd".to_string())
        );
        assert_eq!(
            Route::TaskDetail("abc".to_string()).to_path(),
            "/tasks/abc"
        );
    }

    #[test]
    fn test_nested_detail_path_is_rejected() {
        assert_eq!(Route::from_path("/tasks/abc/extra"), Route::Tasks);
    }

    #[test]
    fn test_auth_screens_are_public() {
        assert!(!Route::SignUp.requires_user());
        assert!(!Route::SignIn.requires_user());
        assert!(Route::Tasks.requires_user());
        assert!(Route::Profile.requires_user());
        assert!(Route::TaskDetail("x".to_string()).requires_user());
    }
}
