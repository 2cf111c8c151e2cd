use crate::menu::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pizza sizes on the menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// The closed set of sizes, in menu order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Size::ALL
            .iter()
            .find(|size| size.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| CatalogError::UnknownSize(wanted.to_string()))
    }
}

/// Toppings on the menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topping {
    Cheese,
    Tomatoes,
    Onions,
    Peppers,
    Mushrooms,
    Bacon,
    Olives,
    Chicken,
}

impl Topping {
    /// The closed set of toppings, in menu order.
    pub const ALL: [Topping; 8] = [
        Topping::Cheese,
        Topping::Tomatoes,
        Topping::Onions,
        Topping::Peppers,
        Topping::Mushrooms,
        Topping::Bacon,
        Topping::Olives,
        Topping::Chicken,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
            Topping::Tomatoes => "Tomatoes",
            Topping::Onions => "Onions",
            Topping::Peppers => "Peppers",
            Topping::Mushrooms => "Mushrooms",
            Topping::Bacon => "Bacon",
            Topping::Olives => "Olives",
            Topping::Chicken => "Chicken",
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topping {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Topping::ALL
            .iter()
            .find(|topping| topping.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| CatalogError::UnknownTopping(wanted.to_string()))
    }
}
