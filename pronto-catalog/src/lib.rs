pub mod money;
pub mod labels;
pub mod menu;

pub use money::Money;
pub use labels::{Size, Topping};
pub use menu::{Menu, SizeCatalog, ToppingCatalog, CatalogError};
