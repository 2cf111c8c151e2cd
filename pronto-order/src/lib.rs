pub mod order;
pub mod layered;

pub use order::Order;
pub use layered::LayeredPizza;

use pronto_catalog::{Menu, Money};

/// Shared price-query capability over any pizza composition.
pub trait Priced {
    /// Total price of the composition against the given menu.
    fn total(&self, menu: &Menu) -> Money;
}
