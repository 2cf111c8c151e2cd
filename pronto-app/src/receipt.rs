use pronto_catalog::{CatalogError, Money};

/// Console line for a computed total, two decimal places.
pub fn total_line(total: Money) -> String {
    format!("Total Pizza Price: {}", total)
}

/// Console line for a rejected selection.
pub fn error_line(err: &CatalogError) -> String {
    format!("Error: {}", err)
}
