use pronto_app::app_config::MenuConfig;
use pronto_app::{price_order, receipt};
use pronto_catalog::{CatalogError, Money};
use pronto_order::{LayeredPizza, Order, Priced};

#[test]
fn test_worked_example_flow() {
    let menu = MenuConfig::default().build_menu().unwrap();

    let receipt = price_order(
        &menu,
        "Medium",
        &["Cheese", "Tomatoes", "Onions", "Pineapple"],
    )
    .unwrap();

    assert_eq!(receipt.total, Money::from_cents(975));
    assert_eq!(
        receipt.lines,
        vec![
            "Error: 'Pineapple' is not an available topping.".to_string(),
            "Total Pizza Price: $9.75".to_string(),
        ]
    );
}

#[test]
fn test_unknown_size_is_reported_not_fatal() {
    let menu = MenuConfig::default().build_menu().unwrap();

    let err = price_order(&menu, "Gigantic", &[]).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownSize(_)));
    assert_eq!(
        receipt::error_line(&err),
        "Error: 'Gigantic' is not an available size."
    );
}

#[test]
fn test_overridden_menu_flows_through_pricing() {
    let mut config = MenuConfig::default();
    config.sizes.insert("medium".to_string(), 6.0);

    let menu = config.build_menu().unwrap();
    let receipt = price_order(&menu, "medium", &["Cheese", "Tomatoes", "Onions"]).unwrap();

    // 6.00 + 1.50 + 0.75 + 0.50
    assert_eq!(receipt.total, Money::from_cents(875));
    assert_eq!(receipt.lines, vec!["Total Pizza Price: $8.75".to_string()]);
}

#[test]
fn test_both_variants_agree_through_public_api() {
    let menu = MenuConfig::default().build_menu().unwrap();

    let mut order = Order::new(menu.parse_size("Large").unwrap());
    for label in ["Bacon", "Mushrooms", "Bacon"] {
        order.add_topping_named(&menu, label).unwrap();
    }
    let layered: LayeredPizza = order.to_layered(&menu);

    assert_eq!(order.total(&menu), layered.total(&menu));

    let receipt = price_order(&menu, "Large", &["Bacon", "Mushrooms", "Bacon"]).unwrap();
    assert_eq!(receipt.total, order.total(&menu));
}
