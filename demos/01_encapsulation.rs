//! # Demo 01: Encapsulation
//!
//! The balance field is private; only `deposit`, `withdraw` and `balance`
//! touch it, and invalid operations are silently ignored.
//!
//! Run with: `cargo run -p primer-demos --example 01_encapsulation`

use primer_core::{BankAccount, CoreResult};
use rust_decimal_macros::dec;

fn main() -> CoreResult<()> {
    println!("=== Demo 01: Encapsulation ===\n");

    let mut account = BankAccount::new(dec!(1000))?;
    account.deposit(dec!(500));
    account.withdraw(dec!(200));
    println!("Balance: {}", account.balance());

    // =========================================================================
    // Method call vs. fully qualified call
    // =========================================================================

    println!("\n--- Method call syntax ---");
    BankAccount::deposit(&mut account, dec!(100));
    println!(
        "After BankAccount::deposit(&mut account, 100): {}",
        account.balance()
    );
    account.deposit(dec!(50));
    println!("After account.deposit(50): {}", account.balance());

    // =========================================================================
    // Guards
    // =========================================================================

    println!("\n--- Guards ---");
    account.deposit(dec!(-10));
    account.withdraw(dec!(1000000));
    println!("After invalid deposit and overdraft: {}", account.balance());

    match account.try_withdraw(dec!(1000000)) {
        Ok(balance) => println!("Unexpected success: {}", balance),
        Err(err) => println!("try_withdraw reports: {}", err),
    }

    println!(
        "\nInterest at 5%: {}",
        BankAccount::calculate_interest(account.balance(), dec!(0.05))?
    );

    Ok(())
}
