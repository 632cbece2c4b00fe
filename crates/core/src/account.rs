//! # Account Module
//!
//! Định nghĩa BankAccount - ví dụ về đóng gói (encapsulation).
//! Số dư là field private, chỉ thay đổi được qua `deposit` / `withdraw`,
//! và không bao giờ âm.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Tài khoản ngân hàng đơn giản.
///
/// # Examples
/// ```
/// use primer_core::BankAccount;
/// use rust_decimal::Decimal;
///
/// let mut account = BankAccount::new(Decimal::from(1000)).unwrap();
/// account.deposit(Decimal::from(500));
/// account.withdraw(Decimal::from(200));
/// assert_eq!(account.balance(), Decimal::from(1300));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankAccount {
    /// Số dư hiện tại (private, luôn >= 0)
    balance: Decimal,
}

impl BankAccount {
    /// Mở tài khoản với số dư ban đầu.
    ///
    /// # Returns
    /// - `Err(CoreError::NegativeBalance)` nếu số dư ban đầu âm
    pub fn new(initial_balance: Decimal) -> CoreResult<Self> {
        if initial_balance < Decimal::ZERO {
            return Err(CoreError::NegativeBalance(initial_balance));
        }
        Ok(Self {
            balance: initial_balance,
        })
    }

    /// Số dư hiện tại
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Nạp tiền. Số tiền <= 0 bị bỏ qua, không báo lỗi.
    pub fn deposit(&mut self, amount: Decimal) {
        if let Err(err) = self.try_deposit(amount) {
            tracing::debug!(%amount, %err, "Deposit ignored");
        }
    }

    /// Rút tiền. Số tiền <= 0 hoặc vượt quá số dư bị bỏ qua, không báo lỗi.
    pub fn withdraw(&mut self, amount: Decimal) {
        if let Err(err) = self.try_withdraw(amount) {
            tracing::debug!(%amount, balance = %self.balance, %err, "Withdrawal ignored");
        }
    }

    /// Nạp tiền, trả về số dư mới.
    ///
    /// # Returns
    /// - `Err(CoreError::InvalidAmount)` nếu số tiền <= 0
    /// - `Err(CoreError::Overflow)` nếu số dư mới vượt quá `Decimal::MAX`
    pub fn try_deposit(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| CoreError::Overflow(format!("{} + {}", self.balance, amount)))?;
        Ok(self.balance)
    }

    /// Rút tiền, trả về số dư mới.
    ///
    /// # Returns
    /// - `Err(CoreError::InvalidAmount)` nếu số tiền <= 0
    /// - `Err(CoreError::InsufficientBalance)` nếu không đủ số dư
    pub fn try_withdraw(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(CoreError::InsufficientBalance {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Tính lãi - associated function, không cần instance.
    pub fn calculate_interest(balance: Decimal, rate: Decimal) -> CoreResult<Decimal> {
        balance
            .checked_mul(rate)
            .ok_or_else(|| CoreError::Overflow(format!("{} * {}", balance, rate)))
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Balance: {}", self.balance)
    }
}
