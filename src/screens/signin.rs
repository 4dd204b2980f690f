//! Sign In Screen
//!
//! Email/password login.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SignInArgs};
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{session_set_user, use_session};

/// Inline messages per field, `None` when the field is fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignInErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignInErrors {
    pub fn any(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }
}

pub fn validate_sign_in(email: &str, password: &str) -> SignInErrors {
    SignInErrors {
        email: if email.trim().is_empty() { Some("Email is required") } else { None },
        password: if password.trim().is_empty() { Some("Password is required") } else { None },
    }
}

/// Login screen
#[component]
pub fn SignInScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(SignInErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();

        let checked = validate_sign_in(&email, &password);
        set_errors.set(checked);
        if checked.any() {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let args = SignInArgs {
                email: &email,
                password: &password,
            };
            match api::sign_in(&args).await {
                Ok(user) => {
                    session_set_user(&session, user);
                    ctx.navigate(Route::Tasks);
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
            <h1>"Sign in to your account"</h1>
            <form on:submit=on_submit>
                <div class="field">
                    <input
                        type="email"
                        placeholder="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
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
                            set_password.set(event_target_value(&ev));
                            set_errors.update(|errors| errors.password = None);
                        }
                    />
                    {move || errors.get().password.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <button type="submit" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <a
                    href="/signup"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::SignUp);
                    }
                >
                    "Register"
                </a>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_are_blocked() {
        let errors = validate_sign_in("", "");
        assert!(errors.any());
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
    }

    #[test]
    fn test_filled_credentials_pass() {
        assert!(!validate_sign_in("ada@example.com", "secret").any());
    }
}
