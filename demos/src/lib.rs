//! # Primer Demos
//!
//! One short run-and-print program per lesson.
//!
//! ## Available Demos
//!
//! 1. **01_encapsulation** - BankAccount deposit / withdraw / balance
//! 2. **02_inheritance** - Dog overrides the animal sound
//! 3. **03_polymorphism** - Japanese / American greeters, shape areas
//! 4. **04_abstraction** - Car implements the abstract vehicle operations
//! 5. **05_singleton** - Two accessor calls, one instance
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run -p primer-demos --example 01_encapsulation
//! cargo run -p primer-demos --example 05_singleton
//! ```

// This crate only contains demos, no library code.
