//! # Error Module
//!
//! Định nghĩa các lỗi của primer-core sử dụng thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core lesson errors.
///
/// Các thao tác "im lặng" như `BankAccount::deposit` không trả về lỗi;
/// các biến thể `try_*` mới dùng enum này.
#[derive(Debug, Error)]
pub enum CoreError {
    // === Money errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    #[error("Balance cannot be negative: {0}")]
    NegativeBalance(Decimal),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    // === Lesson errors ===
    #[error("Unknown lesson: {0}")]
    UnknownLesson(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Kiểm tra có phải lỗi insufficient balance không
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, CoreError::InsufficientBalance { .. })
    }

    /// Kiểm tra có phải lỗi số tiền không hợp lệ không
    pub fn is_invalid_amount(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidAmount(_) | CoreError::NegativeBalance(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::InsufficientBalance {
            needed: dec!(1000),
            available: dec!(500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: need 1000, available 500"
        );

        let err = CoreError::UnknownLesson("recursion".to_string());
        assert_eq!(err.to_string(), "Unknown lesson: recursion");
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::InsufficientBalance {
            needed: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_insufficient_balance());
        assert!(!err.is_invalid_amount());

        assert!(CoreError::InvalidAmount(dec!(-5)).is_invalid_amount());
        assert!(CoreError::NegativeBalance(dec!(-1)).is_invalid_amount());
    }
}
