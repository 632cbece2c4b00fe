//! # Shape Module
//!
//! Đa hình, biến thể thứ hai: tính diện tích cho mọi `Shape`.

use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;

    /// Nhãn ngắn (chữ thường) dùng khi in ra
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn kind(&self) -> &'static str {
        "circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn kind(&self) -> &'static str {
        "rectangle"
    }
}

/// Chỉ làm việc qua trait `Shape`, không biết kiểu cụ thể.
#[derive(Debug, Default)]
pub struct ShapeCalculator;

impl ShapeCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(&self, shape: &dyn Shape) -> String {
        format!("Area of {}: {:.2}", shape.kind(), shape.area())
    }

    pub fn total_area(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|s| s.area()).sum()
    }
}
