//! CLI command handlers

pub mod lesson;
pub mod singleton;
