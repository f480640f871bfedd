//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the suite reporter,
//! including data models, configuration, and manifest loading.
//!
//! 此模块包含套件报告器的核心功能，
//! 包括数据模型、配置和清单加载。

pub mod config;
pub mod manifest;
pub mod models;

// Re-exports
pub use config::ReportConfig;
pub use manifest::load_suites;
pub use models::{TestSuite, TestSuiteState, TestSuites};
