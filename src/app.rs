//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    WildcardSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, signup::SignupPage,
    stock_detail::StockDetailPage, stocks::StocksPage,
};
use crate::routes::{self, Page, RouteParams};
use crate::state::session::{AppSession, SessionStore};
use crate::util::guard::{self, Navigation};
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Opens the session from durable storage before anything renders, provides
/// it (and the client config) as context, and hands every location to
/// [`RouteOutlet`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        log::error!("invalid client config, using defaults: {e}");
        ClientConfig::default()
    });
    let session: RwSignal<AppSession> = RwSignal::new(SessionStore::open(BrowserStorage, &config.token_key));

    provide_context(config);
    provide_context(session);

    view! {
        <Title text="Stock Market"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| view! { <RouteOutlet/> }>
                    <Route path=WildcardSegment("path") view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
}

/// Resolves the current path against the route table and runs the guard.
///
/// The decision is memoized on location and session, so a page only
/// re-renders when its outcome changes: a login on `/login` leaves the form
/// mounted, a logout on a guarded page redirects immediately.
#[component]
fn RouteOutlet() -> impl IntoView {
    let pathname = use_location().pathname;
    let session = expect_context::<RwSignal<AppSession>>();

    let decision = Memo::new(move |_| {
        let matched = routes::resolve(&pathname.get());
        let navigation = session.with(|s| guard::check(matched.route, s.session()));
        (navigation, matched.params)
    });

    move || {
        let (navigation, params) = decision.get();
        match navigation {
            Navigation::Allowed(page) => render_page(page, &params),
            Navigation::Denied { redirect } => view! { <Redirect path=redirect/> }.into_any(),
        }
    }
}

fn render_page(page: Page, params: &RouteParams) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Stocks => view! { <StocksPage/> }.into_any(),
        Page::StockDetail => {
            let symbol = params.get("symbol").unwrap_or_default().to_owned();
            view! { <StockDetailPage symbol=symbol/> }.into_any()
        }
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
