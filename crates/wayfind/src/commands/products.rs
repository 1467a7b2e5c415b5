use colored::Colorize;

use crate::session::Navigator;

/// Run the `products` command: list the catalog.
pub fn run() {
    let navigator = Navigator::default_store();
    let catalog = navigator.catalog();
    if catalog.is_empty() {
        println!("The catalog is empty.");
        return;
    }

    println!("{}", "Products".bold());
    for product in catalog.products() {
        println!(
            "  {:<12} aisle {:<3} at {}",
            product.name.cyan(),
            product.aisle,
            product.node
        );
    }
}
