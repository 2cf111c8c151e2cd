pub mod app_config;
pub mod receipt;

pub use app_config::Config;

use pronto_catalog::{CatalogError, Menu, Money};
use pronto_order::Order;

/// Console output for one priced request.
#[derive(Debug)]
pub struct Receipt {
    pub lines: Vec<String>,
    pub total: Money,
}

/// Price one request: a size word plus topping words. Rejected toppings get
/// an error line and are excluded from the total; an unknown size fails the
/// whole request since there is no base price to start from.
pub fn price_order(
    menu: &Menu,
    size_word: &str,
    topping_words: &[&str],
) -> Result<Receipt, CatalogError> {
    let size = menu.parse_size(size_word)?;
    let mut order = Order::new(size);
    let mut lines = Vec::new();

    for word in topping_words {
        if let Err(err) = order.add_topping_named(menu, word) {
            lines.push(receipt::error_line(&err));
        }
    }

    // Accumulation goes through the flat order, pricing through the layered
    // composition; the two must agree for every valid selection.
    let total = order.to_layered(menu).price();
    tracing::info!(
        "Priced {} pizza with {} toppings: {}",
        order.size(),
        order.toppings().len(),
        total
    );

    lines.push(receipt::total_line(total));
    Ok(Receipt { lines, total })
}
