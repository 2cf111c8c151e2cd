use crate::layered::LayeredPizza;
use crate::Priced;
use pronto_catalog::{CatalogError, Menu, Money, Size, Topping};
use serde::{Deserialize, Serialize};

/// A pizza order: a size plus the accepted toppings, in selection order.
/// Toppings are not deduplicated; the same topping twice is charged twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    size: Size,
    toppings: Vec<Topping>,
}

impl Order {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            toppings: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Add a topping already known to the catalog.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }

    /// Validate a user-supplied topping label and append it. On failure the
    /// topping sequence is untouched and the rejection is returned to the
    /// caller for reporting.
    pub fn add_topping_named(
        &mut self,
        menu: &Menu,
        label: &str,
    ) -> Result<Topping, CatalogError> {
        let topping = menu.parse_topping(label)?;
        self.toppings.push(topping);
        Ok(topping)
    }

    /// Like [`Order::add_topping_named`] but reports the outcome as a flag.
    pub fn try_add_topping(&mut self, menu: &Menu, label: &str) -> bool {
        match self.add_topping_named(menu, label) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("Rejected topping: {}", err);
                false
            }
        }
    }

    /// Base price plus the catalog increment for every accepted topping.
    pub fn price(&self, menu: &Menu) -> Money {
        let mut total = menu.base_price(&self.size);
        for topping in &self.toppings {
            total += menu.topping_price(topping);
        }
        total
    }

    /// Build the equivalent layered composition, wrapping toppings in
    /// selection order.
    pub fn to_layered(&self, menu: &Menu) -> LayeredPizza {
        self.toppings
            .iter()
            .fold(LayeredPizza::base(menu, self.size), |pizza, topping| {
                pizza.top(menu, *topping)
            })
    }
}

impl Priced for Order {
    fn total(&self, menu: &Menu) -> Money {
        self.price(menu)
    }
}
