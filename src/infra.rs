//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the suite reporter,
//! including file system helpers, text utilities and i18n support.
//!
//! 此模块为套件报告器提供基础设施服务，
//! 包括文件系统辅助函数、文本工具和国际化支持。

pub mod fs;
pub mod i18n;
pub mod text;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
