//! # Demo 05: Singleton
//!
//! There is no public constructor; `Singleton::instance()` is the only way in.
//!
//! Run with: `cargo run -p primer-demos --example 05_singleton`

use primer_core::Singleton;

fn main() {
    println!("=== Demo 05: Singleton ===\n");

    // let s = Singleton::new(); // error: `new` is private

    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    println!("s1 == s2: {}", std::ptr::eq(s1, s2));
    println!("s1.id(): {}", s1.id());
    println!("s2.id(): {}", s2.id());

    println!("{}", s1.do_something());
    println!("calls seen through s2: {}", s2.calls());
}
