//! # File System Operations Module / 文件系统操作模块
//!
//! Small helpers for reading the files the reporter consumes.
//!
//! 用于读取报告器所需文件的小型辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Checks if a path exists and points to a regular file.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a file, `false` otherwise
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Reads a whole file into a string, naming the file on failure.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
