//! Reusable view components shared by pages.

pub mod nav_bar;
pub mod portfolio_table;
pub mod quote_card;
