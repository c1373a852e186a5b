//! # Tally CLI
//!
//! Interactive console storefront over the tally-core engine.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         tally-cli                                       │
//! │                                                                         │
//! │  Menu loop ──► input parsing ──► tally-core calls ──► rendering        │
//! │                                                                         │
//! │  Thin I/O glue only. Free-form input errors (bad numbers, bad          │
//! │  indices) are recoverable here: re-prompt, never crash. Engine         │
//! │  errors are printed and the menu continues; this layer is the sole     │
//! │  recovery point.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! # Run with the built-in demo catalog
//! cargo run -p tally-cli
//!
//! # Run against a JSON catalog file
//! cargo run -p tally-cli -- ./catalog.json
//! ```

use std::env;
use std::fs;
use std::io::{self, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tally_core::{Catalog, LineItem, ProductConfig, Promotion, Store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let store = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading catalog file");
            Catalog::from_json(&fs::read_to_string(&path)?)?.build()?
        }
        None => default_catalog().build()?,
    };
    info!(
        products = store.len(),
        total_quantity = store.total_quantity(),
        "store ready"
    );

    run(&store)
}

/// The built-in demo catalog: one product per variant family, with the
/// three promotion kinds spread across them.
fn default_catalog() -> Catalog {
    Catalog {
        products: vec![
            ProductConfig::Standard {
                name: "MacBook Air M2".to_string(),
                price: 1450.0,
                quantity: 100,
                promotion: Some(Promotion::percentage_discount(10.0)),
            },
            ProductConfig::Standard {
                name: "Bose QuietComfort Earbuds".to_string(),
                price: 250.0,
                quantity: 500,
                promotion: Some(Promotion::SecondUnitHalfPrice),
            },
            ProductConfig::Standard {
                name: "Google Pixel 7".to_string(),
                price: 500.0,
                quantity: 250,
                promotion: Some(Promotion::BuyTwoGetOneFree),
            },
            ProductConfig::NonStocked {
                name: "Windows License".to_string(),
                price: 125.0,
                promotion: None,
            },
            ProductConfig::Limited {
                name: "Shipping".to_string(),
                price: 10.0,
                quantity: 250,
                maximum: 1,
                promotion: None,
            },
        ],
    }
}

// =============================================================================
// Menu Loop
// =============================================================================

fn run(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        display_menu();
        let Some(choice) = read_line("Please select an option (1-4): ")? else {
            // stdin closed; leave quietly.
            return Ok(());
        };
        debug!(choice = %choice, "menu selection");

        match choice.as_str() {
            "1" => list_products(store),
            "2" => show_total_quantity(store),
            "3" => process_order(store)?,
            "4" => {
                println!("Thank you for visiting Tally Store! Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please select a valid option."),
        }
    }
}

fn display_menu() {
    println!("\nWelcome to Tally Store!");
    println!("1. List all products in store");
    println!("2. Show total amount in store");
    println!("3. Make an order");
    println!("4. Quit");
}

fn list_products(store: &Store) {
    let products = store.active_products();
    if products.is_empty() {
        println!("\nNo active products available in the store.");
        return;
    }

    println!("\nAvailable Products:");
    for product in products {
        println!("{}", product.display());
    }
}

fn show_total_quantity(store: &Store) {
    println!(
        "\nTotal amount of items in store: {}",
        store.total_quantity()
    );
}

// =============================================================================
// Order Collection
// =============================================================================

/// Collects a shopping list line by line (0 finishes), then places the
/// order. Bad indices and non-numeric input re-prompt; engine errors are
/// printed after the order is attempted.
fn process_order(store: &Store) -> io::Result<()> {
    let products = store.active_products();
    if products.is_empty() {
        println!("\nNo active products available for ordering.");
        return Ok(());
    }

    println!("\nAvailable Products:");
    for (index, product) in products.iter().enumerate() {
        println!("{}. {}", index + 1, product.display());
    }

    let mut shopping_list = Vec::new();
    loop {
        let Some(input) =
            read_line("\nEnter the product number you want to buy (or 0 to finish): ")?
        else {
            break;
        };
        let Ok(index) = input.parse::<usize>() else {
            println!("Invalid selection. Please try again.");
            continue;
        };
        if index == 0 {
            break;
        }
        let Some(product) = products.get(index - 1) else {
            println!("Invalid selection. Please try again.");
            continue;
        };

        let prompt = format!("Enter the quantity for {}: ", product.name());
        let Some(quantity_input) = read_line(&prompt)? else {
            break;
        };
        let Ok(quantity) = quantity_input.parse::<i64>() else {
            println!("Invalid selection. Please try again.");
            continue;
        };

        if quantity > 0 {
            shopping_list.push(LineItem::new(product.clone(), quantity));
        } else {
            println!("Quantity must be greater than zero.");
        }
    }

    if shopping_list.is_empty() {
        println!("\nNo items were ordered.");
        return Ok(());
    }

    debug!(lines = shopping_list.len(), "placing order");
    match store.order(&shopping_list) {
        Ok(total) => println!("\nOrder placed successfully! Total price: {total} dollars."),
        Err(err) => {
            warn!(error = %err, "order failed");
            println!("\nFailed to place order: {err}");
            // Orders are not all-or-nothing: lines before the failing
            // one were already deducted from stock.
            println!("Items earlier in the order have already been deducted from stock.");
        }
    }
    Ok(())
}

/// Prompts and reads one trimmed line. `None` means stdin was closed.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
