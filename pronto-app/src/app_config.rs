use pronto_catalog::{CatalogError, Menu, Money};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,
}

/// Per-label price overrides in dollars. Labels left out keep their
/// compiled-in list prices.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MenuConfig {
    #[serde(default)]
    pub sizes: HashMap<String, f64>,
    #[serde(default)]
    pub toppings: HashMap<String, f64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file.
            // Every file is optional so the binary also runs with the
            // compiled-in list prices alone.
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local configuration, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `PRONTO_MENU__SIZES__SMALL=4.50` overrides the small base price
            .add_source(config::Environment::with_prefix("PRONTO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl MenuConfig {
    /// Build the menu, applying overrides on top of the list prices.
    /// Unknown labels and negative amounts are rejected.
    pub fn build_menu(&self) -> Result<Menu, CatalogError> {
        let mut menu = Menu::new();

        for (label, dollars) in &self.sizes {
            let size = menu.parse_size(label)?;
            menu.sizes.set_price(size, Money::from_dollars(*dollars))?;
        }
        for (label, dollars) in &self.toppings {
            let topping = menu.parse_topping(label)?;
            menu.toppings
                .set_price(topping, Money::from_dollars(*dollars))?;
        }

        Ok(menu)
    }
}
