//! # Configuration Module / 配置模块
//!
//! Report settings loaded from a TOML file. Every field has a default, so an
//! empty file is a valid configuration.
//!
//! 从 TOML 文件加载的报告设置。每个字段都有默认值，因此空文件也是有效的配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Controls whether color tags are turned into ANSI escapes.
/// 控制颜色标签是否被转换为 ANSI 转义序列。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize when the terminal supports it / 终端支持时着色
    #[default]
    Auto,
    /// Always emit escapes / 总是输出转义序列
    Always,
    /// Strip color tags / 移除颜色标签
    Never,
}

/// The order in which failed suites are listed in the report.
/// 报告中失败套件的列出顺序。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuiteOrder {
    /// Keep the order the suites were supplied in / 保持套件提供时的顺序
    #[default]
    Given,
    /// Stable sort by package name, for reproducible snapshots / 按包名稳定排序，便于得到可复现的快照
    PackageName,
}

/// Represents the report configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的报告配置。
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// The language for report messages (e.g., "en", "zh-CN").
    /// When absent, the system locale is detected.
    ///
    /// 报告消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则检测系统语言。
    pub language: Option<String>,

    /// Color handling for the rendered report.
    /// 渲染报告时的颜色处理方式。
    pub color: ColorMode,

    /// Ordering of the suites in the report body.
    /// 报告正文中套件的顺序。
    pub order: SuiteOrder,

    /// Overrides the reason shown for suites that timed out.
    /// 覆盖超时套件所显示的原因。
    pub timeout_reason: Option<String>,
}

/// Loads and parses the report configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// The parsed `ReportConfig`, or an error describing which step failed
pub fn load_report_config(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report config: {}", path.display()))?;
    let config: ReportConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse report config: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        color = ?config.color,
        order = ?config.order,
        "loaded report config"
    );
    Ok(config)
}
