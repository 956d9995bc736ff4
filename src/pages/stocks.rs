//! Stock search page: `POST /stock/search` with add-to-portfolio actions.

#[cfg(test)]
#[path = "stocks_test.rs"]
mod stocks_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::ClientConfig;
use crate::net::types::StockSearchResult;
use crate::routes::stock_detail_path;
use crate::state::session::AppSession;

/// Minimum query length the search box submits.
pub const MIN_QUERY_LEN: usize = 1;

/// Trim the search box input. Returns `None` when too short to send.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (query.chars().count() >= MIN_QUERY_LEN).then(|| query.to_owned())
}

#[component]
pub fn StocksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let config = expect_context::<ClientConfig>();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<StockSearchResult>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let liveness = super::ViewLiveness::install();

    let search_config = config.clone();
    let search_liveness = liveness.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(query_value) = normalize_query(&query.get_untracked()) else {
            info.set("Enter a company name or ticker.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Searching...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::net::api::StockApi;

            let config = search_config.clone();
            let liveness = search_liveness.clone();
            leptos::task::spawn_local(async move {
                let result = super::with_stock_api(session, &config, |api, token| async move {
                    api.search_stocks(&token, &query_value).await
                })
                .await;
                if !liveness.is_alive() {
                    log::debug!("search response dropped: page no longer active");
                    return;
                }
                match result {
                    Ok(hits) => {
                        info.set(if hits.is_empty() { "No matches.".to_owned() } else { String::new() });
                        results.set(hits);
                    }
                    Err(e) => info.set(super::stock_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (query_value, &search_config, &search_liveness, session, results);
        }
    };

    let on_add = Callback::new(move |symbol: String| {
        #[cfg(feature = "csr")]
        {
            use crate::net::api::StockApi;

            let config = config.clone();
            let liveness = liveness.clone();
            leptos::task::spawn_local(async move {
                let result =
                    super::with_stock_api(session, &config, |api, token| async move { api.add_stock(&token, &symbol).await })
                        .await;
                if !liveness.is_alive() {
                    return;
                }
                match result {
                    Ok(details) => info.set(format!("Added {} to your portfolio.", details.symbol)),
                    Err(e) => info.set(super::stock_error_message(&e)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (symbol, &config, &liveness, session);
        }
    });

    view! {
        <div class="stocks-page">
            <h1>"Find stocks"</h1>
            <form class="stocks-page__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Apple, AAPL..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Search"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="stocks-page__info">{move || info.get()}</p>
            </Show>
            <ul class="stocks-page__results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|hit| {
                            let symbol = hit.symbol.clone();
                            view! {
                                <li class="stock-hit">
                                    <A href=stock_detail_path(&hit.symbol)>
                                        <strong>{hit.symbol.clone()}</strong>
                                    </A>
                                    <span class="stock-hit__name">{hit.name.clone()}</span>
                                    <span class="stock-hit__exchange">{hit.exchange.clone()}</span>
                                    <button class="btn btn--small" on:click=move |_| on_add.run(symbol.clone())>
                                        "Add"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
