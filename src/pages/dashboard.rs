//! Dashboard page: the user's tracked stocks.
//!
//! Runs a one-off `GET /me` check on mount so a token revoked server-side
//! ends the session here instead of on the next failing call.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{ViewLiveness, stock_error_message, with_stock_api};
use crate::components::portfolio_table::PortfolioTable;
use crate::config::ClientConfig;
use crate::net::api::StockApi;
use crate::state::session::AppSession;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let config = expect_context::<ClientConfig>();
    let notice = RwSignal::new(String::new());
    let liveness = ViewLiveness::install();

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move { super::revalidate_session(session, &config).await });
    }

    let fetch_config = config.clone();
    let portfolio = LocalResource::new(move || {
        let config = fetch_config.clone();
        async move { with_stock_api(session, &config, |api, token| async move { api.user_stocks(&token).await }).await }
    });

    let on_remove = Callback::new(move |stock_id: String| {
        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let portfolio = portfolio.clone();
            let liveness = liveness.clone();
            leptos::task::spawn_local(async move {
                let result =
                    with_stock_api(session, &config, |api, token| async move { api.remove_stock(&token, &stock_id).await })
                        .await;
                if !liveness.is_alive() {
                    log::debug!("remove response dropped: page no longer active");
                    return;
                }
                match result {
                    Ok(()) => {
                        notice.set(String::new());
                        portfolio.refetch();
                    }
                    Err(e) => notice.set(stock_error_message(&e)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (stock_id, &config, notice, &portfolio, &liveness);
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your stocks"</h1>
                <A href="/stocks">"+ Add a stock"</A>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="dashboard-page__notice">{move || notice.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading portfolio..."</p> }>
                {move || {
                    portfolio
                        .get()
                        .map(|result| match result {
                            Ok(stocks) => view! { <PortfolioTable stocks=stocks on_remove=on_remove/> }.into_any(),
                            Err(e) => {
                                view! { <p class="dashboard-page__error">{stock_error_message(&e)}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
