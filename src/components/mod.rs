//! Reusable view components.

pub mod nav_bar;
pub mod product_card;
