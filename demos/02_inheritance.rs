//! # Demo 02: Inheritance
//!
//! Run with: `cargo run -p primer-demos --example 02_inheritance`

use primer_core::{Animal, Dog, GenericAnimal};

fn main() {
    println!("=== Demo 02: Inheritance ===\n");

    let animal = GenericAnimal::new("Animal");
    let dog = Dog::new("Pochi");

    println!("{}", animal.make_sound());
    println!("{}", dog.make_sound());

    // Dispatch through the base trait still reaches the override
    let as_animal: &dyn Animal = &dog;
    println!("Through &dyn Animal: {}", as_animal.make_sound());
}
