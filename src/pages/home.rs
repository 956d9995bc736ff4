//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::AppSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();

    view! {
        <div class="home-page">
            <h1>"Stock Market"</h1>
            <p>"Search listed stocks and keep a watchlist of the ones you follow."</p>
            <Show
                when=move || session.with(AppSession::is_authenticated)
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <A href="/login">"Log in"</A>
                            <A href="/signup">"Create an account"</A>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <A href="/dashboard">"Go to your dashboard"</A>
                </div>
            </Show>
        </div>
    }
}
