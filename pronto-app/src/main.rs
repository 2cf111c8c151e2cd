use anyhow::Context;
use pronto_app::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pronto_app=info,pronto_order=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let menu = config
        .menu
        .build_menu()
        .context("Invalid menu configuration")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (size, toppings): (&str, Vec<&str>) = if args.is_empty() {
        // Worked example: a medium with cheese, tomatoes and onions, plus
        // one selection that is not on the menu.
        ("Medium", vec!["Cheese", "Tomatoes", "Onions", "Pineapple"])
    } else {
        (
            args[0].as_str(),
            args[1..].iter().map(String::as_str).collect(),
        )
    };

    match pronto_app::price_order(&menu, size, &toppings) {
        Ok(receipt) => {
            for line in &receipt.lines {
                println!("{}", line);
            }
        }
        // An unknown size is reported, never fatal
        Err(err) => println!("{}", pronto_app::receipt::error_line(&err)),
    }

    Ok(())
}
