//! Table of the user's tracked stocks.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::PortfolioStock;
use crate::routes::stock_detail_path;
use crate::util::format::{change_class, format_price};

/// Portfolio rows with a per-row remove action. `on_remove` receives the stock ID.
#[component]
pub fn PortfolioTable(stocks: Vec<PortfolioStock>, on_remove: Callback<String>) -> impl IntoView {
    if stocks.is_empty() {
        return view! {
            <p class="portfolio__empty">
                "No stocks tracked yet. " <A href="/stocks">"Find one to add."</A>
            </p>
        }
            .into_any();
    }

    view! {
        <table class="portfolio">
            <thead>
                <tr>
                    <th>"Symbol"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Change"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {stocks
                    .into_iter()
                    .map(|stock| {
                        let change = stock.change_percent();
                        let class = change_class(change.unwrap_or_default());
                        let change_text = change.map_or_else(|| "–".to_owned(), |pct| format!("{pct:+.2}%"));
                        let stock_id = stock.stock_id.clone();
                        view! {
                            <tr class=class>
                                <td>
                                    <A href=stock_detail_path(&stock.symbol)>{stock.symbol.clone()}</A>
                                </td>
                                <td>{stock.name.clone()}</td>
                                <td>{format_price(stock.price, &stock.currency)}</td>
                                <td>{change_text}</td>
                                <td>
                                    <button class="btn btn--small" on:click=move |_| on_remove.run(stock_id.clone())>
                                        "Remove"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
        .into_any()
}
