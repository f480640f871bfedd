//! # Suite Manifest Module / 套件清单模块
//!
//! Reads the suite records written by the execution engine. JSON files are
//! recognized by their `.json` extension; anything else is parsed as TOML.
//!
//! 读取执行引擎写出的套件记录。扩展名为 `.json` 的文件按 JSON 解析，其余按 TOML 解析。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::models::TestSuites;
use crate::infra::fs;

/// The on-disk shape of a manifest: a top-level `suites` array.
/// 清单文件的磁盘格式：顶层的 `suites` 数组。
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SuiteManifest {
    #[serde(default)]
    pub suites: TestSuites,
}

/// Loads the suites recorded in a manifest file, keeping their order.
///
/// # Arguments
/// * `path` - Path to a `.json` or TOML manifest
///
/// # Returns
/// The suites in the order they appear in the file
pub fn load_suites(path: &Path) -> Result<TestSuites> {
    let content = fs::read_file(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let manifest: SuiteManifest = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON suite manifest: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML suite manifest: {}", path.display()))?
    };

    tracing::debug!(
        path = %path.display(),
        suites = manifest.suites.len(),
        unresolved = manifest.suites.unresolved(),
        "loaded suite manifest"
    );
    Ok(manifest.suites)
}
