//! # Reporting Module / 报告模块
//!
//! This module turns suite outcomes into text. It provides the template
//! formatter that resolves color tags and the console renderers built on it.
//!
//! 此模块将套件结果转换为文本。它提供解析颜色标签的模板格式化器，以及基于它的控制台渲染器。

pub mod console;
pub mod formatter;

// Re-export common reporting items
pub use console::{Reporter, failed_suites_report};
pub use formatter::{Formatter, TemplateFormatter};
