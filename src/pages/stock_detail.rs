//! Stock detail page for `/stocks/:symbol`.

use leptos::prelude::*;

use super::{ViewLiveness, stock_error_message, with_stock_api};
use crate::components::quote_card::QuoteCard;
use crate::config::ClientConfig;
use crate::net::api::{StockApi, normalize_symbol};
use crate::state::session::AppSession;

#[component]
pub fn StockDetailPage(symbol: String) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let config = expect_context::<ClientConfig>();
    let symbol = normalize_symbol(&symbol).unwrap_or_default();
    let notice = RwSignal::new(String::new());
    let liveness = ViewLiveness::install();

    let fetch_config = config.clone();
    let fetch_symbol = symbol.clone();
    let details = LocalResource::new(move || {
        let config = fetch_config.clone();
        let symbol = fetch_symbol.clone();
        async move {
            with_stock_api(session, &config, |api, token| async move { api.stock_details(&token, &symbol).await })
                .await
        }
    });

    let add_symbol = symbol.clone();
    let on_add = move |_| {
        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let symbol = add_symbol.clone();
            let liveness = liveness.clone();
            leptos::task::spawn_local(async move {
                let result =
                    with_stock_api(session, &config, |api, token| async move { api.add_stock(&token, &symbol).await })
                        .await;
                if !liveness.is_alive() {
                    return;
                }
                notice.set(match result {
                    Ok(added) => format!("Added {} to your portfolio.", added.symbol),
                    Err(e) => stock_error_message(&e),
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &add_symbol, &liveness, session);
        }
    };

    view! {
        <div class="stock-detail-page">
            <Suspense fallback=move || view! { <p>"Loading quote..."</p> }>
                {move || {
                    details
                        .get()
                        .map(|result| match result {
                            Ok(quote) => view! { <QuoteCard details=quote/> }.into_any(),
                            Err(e) => {
                                view! { <p class="stock-detail-page__error">{stock_error_message(&e)}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <button class="btn btn--primary" on:click=on_add>
                {format!("Add {symbol} to portfolio")}
            </button>
            <Show when=move || !notice.get().is_empty()>
                <p class="stock-detail-page__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
