//! Built-in catalog contents used when no seed file is configured.

use crate::product::Product;

pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "The Pragmatic Programmer", "Books")
            .with_description("Classic guide to software craftsmanship")
            .with_price(4299),
        Product::new(2, "The Rust Programming Language", "Books")
            .with_description("The official book on Rust")
            .with_price(3999),
        Product::new(3, "Mechanical Keyboard", "Electronics")
            .with_description("Tenkeyless keyboard with tactile switches")
            .with_price(8999),
        Product::new(4, "Noise-Cancelling Headphones", "Electronics").with_price(19999),
        Product::new(5, "Pour-Over Coffee Set", "Kitchen")
            .with_description("Ceramic dripper, carafe, and filters")
            .with_price(3450),
        Product::new(6, "Designing Data-Intensive Applications", "books").with_price(4599),
    ]
}
