//! Quote summary for a single stock.

use leptos::prelude::*;

use crate::net::types::StockDetails;
use crate::util::format::{format_change, format_price, format_volume};

#[component]
pub fn QuoteCard(details: StockDetails) -> impl IntoView {
    let class = if details.is_up() { "quote-card quote--up" } else { "quote-card quote--down" };
    let price = format_price(details.price, &details.currency);
    let change = format_change(details.change, details.change_percent);
    let range = format!("{:.2} – {:.2}", details.low, details.high);
    let volume = format_volume(details.volume);
    let updated = details.last_updated.clone().unwrap_or_default();

    view! {
        <div class=class>
            <header class="quote-card__header">
                <h2>{details.symbol.clone()}</h2>
                <span class="quote-card__name">{details.name.clone()}</span>
                <span class="quote-card__exchange">{details.exchange.clone()}</span>
            </header>
            <p class="quote-card__price">{price}</p>
            <p class="quote-card__change">{change}</p>
            <dl class="quote-card__stats">
                <dt>"Day range"</dt>
                <dd>{range}</dd>
                <dt>"Volume"</dt>
                <dd>{volume}</dd>
                <dt>"Updated"</dt>
                <dd>{updated}</dd>
            </dl>
        </div>
    }
}
