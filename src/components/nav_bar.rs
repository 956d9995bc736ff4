//! Top navigation with session-aware links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::LOGIN_PATH;
use crate::state::session::AppSession;

/// Navigation bar. Shows portfolio links and a logout link while
/// authenticated, login/signup links otherwise.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let authenticated = move || session.with(AppSession::is_authenticated);

    view! {
        <nav class="nav-bar">
            <A href="/">"Stock Market"</A>
            <Show
                when=authenticated
                fallback=|| {
                    view! {
                        <div class="nav-bar__links">
                            <A href="/login">"Log in"</A>
                            <A href="/signup">"Sign up"</A>
                        </div>
                    }
                }
            >
                <div class="nav-bar__links">
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/stocks">"Stocks"</A>
                    // The router follows the link; the handler only ends the session.
                    <a href=LOGIN_PATH class="btn" on:click=move |_| session.update(AppSession::logout)>
                        "Log out"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
