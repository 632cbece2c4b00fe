//! # Demo 03: Polymorphism
//!
//! Run with: `cargo run -p primer-demos --example 03_polymorphism`

use primer_core::{American, Circle, Human, Japanese, Rectangle, Shape, ShapeCalculator};

fn main() {
    println!("=== Demo 03: Polymorphism ===\n");

    let mut human: Box<dyn Human> = Box::new(Japanese::new("太郎"));
    println!("{}", human.say_hello());
    human = Box::new(American::new("John"));
    println!("{}", human.say_hello());

    println!();

    let calculator = ShapeCalculator::new();
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(5.0)),
        Box::new(Rectangle::new(4.0, 6.0)),
    ];
    for shape in &shapes {
        println!("{}", calculator.describe(shape.as_ref()));
    }
    println!("Total area: {:.2}", calculator.total_area(&shapes));
}
