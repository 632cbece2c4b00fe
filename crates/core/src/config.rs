//! # Config Module
//!
//! Cấu hình bài học đọc từ file TOML.
//! Mọi field đều có giá trị mặc định giống bản demo gốc, nên file rỗng
//! (hoặc không có file) vẫn là cấu hình hợp lệ.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Lỗi khi nạp cấu hình
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Không tìm thấy file
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Lỗi IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lỗi parse TOML
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Giá trị không hợp lệ
    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub initial_balance: Decimal,
    pub deposit: Decimal,
    pub withdraw: Decimal,
    pub interest_rate: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            initial_balance: Decimal::from(1000),
            deposit: Decimal::from(500),
            withdraw: Decimal::from(200),
            // 0.05
            interest_rate: Decimal::new(5, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    pub japanese: String,
    pub american: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            japanese: "Taro".to_string(),
            american: "John".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub radius: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            width: 4.0,
            height: 6.0,
        }
    }
}

/// Các giá trị dùng khi chạy bài học
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub account: AccountConfig,
    pub dog_name: String,
    pub greeters: GreeterConfig,
    pub car_brand: String,
    pub shapes: ShapeConfig,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            account: AccountConfig::default(),
            dog_name: "Pochi".to_string(),
            greeters: GreeterConfig::default(),
            car_brand: "Toyota".to_string(),
            shapes: ShapeConfig::default(),
        }
    }
}

/// Nạp và kiểm tra `LessonConfig`
pub struct ConfigLoader;

impl ConfigLoader {
    /// Nạp cấu hình từ file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LessonConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;

        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Nạp cấu hình từ string
    pub fn load_str(content: &str) -> Result<LessonConfig, ConfigError> {
        let config: LessonConfig = toml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &LessonConfig) -> Result<(), ConfigError> {
        if config.account.initial_balance < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "account.initial_balance must not be negative: {}",
                config.account.initial_balance
            )));
        }

        let names = [
            ("dog_name", &config.dog_name),
            ("greeters.japanese", &config.greeters.japanese),
            ("greeters.american", &config.greeters.american),
            ("car_brand", &config.car_brand),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{} must not be empty", field)));
            }
        }

        let dims = [
            ("shapes.radius", config.shapes.radius),
            ("shapes.width", config.shapes.width),
            ("shapes.height", config.shapes.height),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be a positive number, got {}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}
