//! Signup page: registers an account via `POST /signup`.
//!
//! A successful signup does not log the user in; the page points them at
//! the login form instead.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::{ViewLiveness, validate_credentials};
use crate::config::ClientConfig;
use crate::state::session::AppSession;

/// Validate the signup form, including the password confirmation.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let (email, password) = validate_credentials(email, password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email, password))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let config = expect_context::<ClientConfig>();
    let liveness = ViewLiveness::install();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_signup(&email.get_untracked(), &password.get_untracked(), &confirm.get_untracked()) {
                Ok(pair) => pair,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let liveness = liveness.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::HttpApi;

                let store = session.get_untracked();
                let result = match HttpApi::new(&config) {
                    Ok(api) => store.signup(&api, &email_value, &password_value).await,
                    Err(e) => Err(e.into()),
                };
                if !liveness.is_alive() {
                    return;
                }
                match result {
                    Ok(outcome) => {
                        info.set(format!("{}. You can now log in.", outcome.message));
                        created.set(true);
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, &config, &liveness, session, created);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || created.get()>
                    <A href="/login">"Go to login"</A>
                </Show>
            </div>
        </div>
    }
}
