//! # Demo 04: Abstraction
//!
//! Run with: `cargo run -p primer-demos --example 04_abstraction`

use primer_core::{Car, Vehicle};

fn main() {
    println!("=== Demo 04: Abstraction ===\n");

    let car = Car::new("Toyota");
    println!("{}", car.start());
    println!("{}", car.stop());
    println!("{}", car.display_brand());
}
