use crate::labels::{Size, Topping};
use crate::money::Money;
use std::collections::HashMap;

impl Size {
    /// List price for a size. Exhaustive by construction, so size lookups
    /// have no failure path.
    pub fn list_price(&self) -> Money {
        match self {
            Size::Small => Money::from_cents(500),
            Size::Medium => Money::from_cents(700),
            Size::Large => Money::from_cents(1000),
        }
    }
}

impl Topping {
    /// List increment for a topping.
    pub fn list_price(&self) -> Money {
        match self {
            Topping::Cheese => Money::from_cents(150),
            Topping::Tomatoes => Money::from_cents(75),
            Topping::Onions => Money::from_cents(50),
            Topping::Peppers => Money::from_cents(70),
            Topping::Mushrooms => Money::from_cents(80),
            Topping::Bacon => Money::from_cents(120),
            Topping::Olives => Money::from_cents(60),
            Topping::Chicken => Money::from_cents(175),
        }
    }
}

/// Base prices per size, with optional per-size overrides on top of the
/// list prices. Read-only once pricing starts.
#[derive(Debug, Clone, Default)]
pub struct SizeCatalog {
    overrides: HashMap<Size, Money>,
}

impl SizeCatalog {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Current price for a size.
    pub fn price(&self, size: &Size) -> Money {
        self.overrides
            .get(size)
            .copied()
            .unwrap_or_else(|| size.list_price())
    }

    /// Override the price for a size. Construction-time only.
    pub fn set_price(&mut self, size: Size, price: Money) -> Result<(), CatalogError> {
        if price.is_negative() {
            return Err(CatalogError::NegativePrice {
                label: size.label().to_string(),
                cents: price.cents(),
            });
        }
        self.overrides.insert(size, price);
        Ok(())
    }
}

/// Increment prices per topping, with optional overrides.
#[derive(Debug, Clone, Default)]
pub struct ToppingCatalog {
    overrides: HashMap<Topping, Money>,
}

impl ToppingCatalog {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Current increment for a topping.
    pub fn price(&self, topping: &Topping) -> Money {
        self.overrides
            .get(topping)
            .copied()
            .unwrap_or_else(|| topping.list_price())
    }

    /// Override the increment for a topping. Construction-time only.
    pub fn set_price(&mut self, topping: Topping, price: Money) -> Result<(), CatalogError> {
        if price.is_negative() {
            return Err(CatalogError::NegativePrice {
                label: topping.label().to_string(),
                cents: price.cents(),
            });
        }
        self.overrides.insert(topping, price);
        Ok(())
    }
}

/// The full menu handed to pricing code: size catalog plus topping catalog.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    pub sizes: SizeCatalog,
    pub toppings: ToppingCatalog,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_price(&self, size: &Size) -> Money {
        self.sizes.price(size)
    }

    pub fn topping_price(&self, topping: &Topping) -> Money {
        self.toppings.price(topping)
    }

    /// Validate a user-supplied size label against the catalog.
    pub fn parse_size(&self, label: &str) -> Result<Size, CatalogError> {
        label.parse()
    }

    /// Validate a user-supplied topping label against the catalog.
    pub fn parse_topping(&self, label: &str) -> Result<Topping, CatalogError> {
        label.parse()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("'{0}' is not an available size.")]
    UnknownSize(String),

    #[error("'{0}' is not an available topping.")]
    UnknownTopping(String),

    #[error("Price for '{label}' is negative ({cents} cents)")]
    NegativePrice { label: String, cents: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_prices() {
        let menu = Menu::new();
        assert_eq!(menu.base_price(&Size::Small), Money::from_cents(500));
        assert_eq!(menu.base_price(&Size::Medium), Money::from_cents(700));
        assert_eq!(menu.base_price(&Size::Large), Money::from_cents(1000));
        assert_eq!(menu.topping_price(&Topping::Cheese), Money::from_cents(150));
        assert_eq!(
            menu.topping_price(&Topping::Tomatoes),
            Money::from_cents(75)
        );
        assert_eq!(menu.topping_price(&Topping::Onions), Money::from_cents(50));
    }

    #[test]
    fn test_override_applies() {
        let mut menu = Menu::new();
        menu.sizes
            .set_price(Size::Medium, Money::from_cents(650))
            .unwrap();
        menu.toppings
            .set_price(Topping::Cheese, Money::from_cents(125))
            .unwrap();

        assert_eq!(menu.base_price(&Size::Medium), Money::from_cents(650));
        assert_eq!(menu.topping_price(&Topping::Cheese), Money::from_cents(125));
        // Labels without overrides keep their list prices
        assert_eq!(menu.base_price(&Size::Small), Money::from_cents(500));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut menu = Menu::new();
        let result = menu.sizes.set_price(Size::Small, Money::from_cents(-1));
        assert!(result.is_err());
        // Rejected override leaves the catalog untouched
        assert_eq!(menu.base_price(&Size::Small), Money::from_cents(500));
    }
}
