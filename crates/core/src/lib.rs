//! # Primer Core
//!
//! Các kiểu dữ liệu cho từng bài học hướng đối tượng:
//! - `account`: đóng gói (encapsulation) với BankAccount
//! - `animal`: kế thừa và ghi đè phương thức (Animal / Dog)
//! - `human`, `shape`: đa hình qua trait object
//! - `vehicle`: trừu tượng hóa (Vehicle / Car)
//! - `singleton`: một instance dùng chung cho toàn process
//!
//! `lesson` gom tất cả lại thành các transcript có thể in ra console.

pub mod account;
pub mod animal;
pub mod config;
pub mod error;
pub mod human;
pub mod lesson;
pub mod shape;
pub mod singleton;
pub mod vehicle;

pub use account::BankAccount;
pub use animal::{Animal, Dog, GenericAnimal};
pub use config::{ConfigError, ConfigLoader, LessonConfig};
pub use error::{CoreError, CoreResult};
pub use human::{American, Human, Japanese};
pub use lesson::{run, Lesson, Transcript};
pub use shape::{Circle, Rectangle, Shape, ShapeCalculator};
pub use singleton::{Journal, Singleton};
pub use vehicle::{Car, Vehicle};
