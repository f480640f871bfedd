//! # Suite Reporter Library / 套件报告库
//!
//! This library aggregates the terminal outcomes of a multi-suite test run and
//! renders aligned, color-annotated reports of the suites that failed.
//!
//! 此库汇总多套件测试运行的最终结果，
//! 并为失败的套件渲染对齐的、带颜色标注的报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Suite data models, configuration and manifest loading
//! - `infra` - File system helpers, text utilities and i18n support
//! - `reporting` - Template formatting and report rendering
//!
//! - `core` - 套件数据模型、配置和清单加载
//! - `infra` - 文件系统辅助函数、文本工具和国际化支持
//! - `reporting` - 模板格式化和报告渲染
//!
//! ## Example / 示例
//!
//! ```
//! use suite_reporter::models::{TestSuite, TestSuiteState, TestSuites};
//! use suite_reporter::reporting::{TemplateFormatter, failed_suites_report};
//!
//! let suites: TestSuites = vec![
//!     TestSuite::with_state("Pkg", "./pkg", TestSuiteState::Failed),
//!     TestSuite::with_state("Other", "./other", TestSuiteState::Passed),
//! ]
//! .into();
//!
//! let report = failed_suites_report(&suites, &TemplateFormatter::plain());
//! assert_eq!(
//!     report,
//!     "There were failures detected in the following suites:\n  Pkg ./pkg\n"
//! );
//! ```

pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::manifest;
pub use crate::core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
