//! # Vehicle Module
//!
//! Bài học trừu tượng hóa. `Vehicle` đóng vai lớp cơ sở trừu tượng:
//! `start`/`stop` không có thân hàm, mỗi kiểu cụ thể phải tự cài đặt;
//! `display_brand` là phương thức cụ thể dùng chung.

pub trait Vehicle {
    fn brand(&self) -> &str;
    fn start(&self) -> String;
    fn stop(&self) -> String;

    fn display_brand(&self) -> String {
        format!("Brand: {}", self.brand())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    brand: String,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }
}

impl Vehicle for Car {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn start(&self) -> String {
        format!("{} car started its engine", self.brand)
    }

    fn stop(&self) -> String {
        format!("{} car stopped", self.brand)
    }
}
