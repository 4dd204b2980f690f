//! Sign Up Screen
//!
//! Account registration with inline required-field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, SignUpArgs};
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{session_set_user, use_session};

/// Inline messages per field, `None` when the field is fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignUpErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignUpErrors {
    pub fn any(&self) -> bool {
        self.username.is_some() || self.email.is_some() || self.password.is_some()
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(message)
    } else {
        None
    }
}

/// Check required fields before anything goes on the wire.
pub fn validate_sign_up(username: &str, email: &str, password: &str) -> SignUpErrors {
    SignUpErrors {
        username: required(username, "User name is required"),
        email: required(email, "Email is required"),
        password: required(password, "Password is required"),
    }
}

/// Registration screen
#[component]
pub fn SignUpScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(SignUpErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let email = email.get();
        let password = password.get();

        let checked = validate_sign_up(&username, &email, &password);
        set_errors.set(checked);
        if checked.any() {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let args = SignUpArgs {
                username: &username,
                email: &email,
                password: &password,
            };
            match api::sign_up(&args).await {
                Ok(user) => {
                    ctx.toast_success(
                        "Registration was successful. You are participating in the system",
                    );
                    session_set_user(&session, user);
                    ctx.navigate(Route::Profile);
                }
                Err(err) => {
                    set_submitting.set(false);
                    ctx.toast_error(err.user_message());
                }
            }
        });
    };

    view! {
        <div class="auth-screen">
            <h1>"Create an account"</h1>
            <form on:submit=on_submit>
                <div class="field">
                    <input
                        type="text"
                        placeholder="user name"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_username.set(input.value());
                            set_errors.update(|errors| errors.username = None);
                        }
                    />
                    {move || errors.get().username.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <div class="field">
                    <input
                        type="email"
                        placeholder="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                            set_errors.update(|errors| errors.email = None);
                        }
                    />
                    {move || errors.get().email.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <div class="field">
                    <input
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                            set_errors.update(|errors| errors.password = None);
                        }
                    />
                    {move || errors.get().password.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <button type="submit" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a
                    href="/signin"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::SignIn);
                    }
                >
                    "Login"
                </a>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let errors = validate_sign_up("", "", "");
        assert!(errors.any());
        assert_eq!(errors.username, Some("User name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
    }

    #[test]
    fn test_empty_email_blocks_submission() {
        let errors = validate_sign_up("ada", "", "secret");
        assert!(errors.any());
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_sign_up("  ", "ada@example.com", "secret");
        assert_eq!(errors.username, Some("User name is required"));
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(!validate_sign_up("ada", "ada@example.com", "secret").any());
    }
}
