//! Login page: email and password against `POST /login`.

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use super::{ViewLiveness, validate_credentials};
use crate::config::ClientConfig;
use crate::state::session::AppSession;

/// Where a successful login lands.
pub const AFTER_LOGIN_PATH: &str = "/dashboard";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let config = expect_context::<ClientConfig>();
    let liveness = ViewLiveness::install();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let liveness = liveness.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::{AuthApi, HttpApi};
                use crate::net::types::Credentials;

                let result = match HttpApi::new(&config) {
                    Ok(api) => api.login(&Credentials::new(&email_value, &password_value)).await,
                    Err(e) => Err(e),
                };
                if !liveness.is_alive() {
                    log::debug!("login response dropped: page no longer active");
                    return;
                }
                match session.try_update(|s| s.complete_login(result)) {
                    Some(Ok(())) => navigate(AFTER_LOGIN_PATH, NavigateOptions::default()),
                    Some(Err(e)) => {
                        info.set(e.user_message());
                        busy.set(false);
                    }
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, &config, &liveness, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
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
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? " <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
