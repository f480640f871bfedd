//! # Template Formatter Module / 模板格式化模块
//!
//! Renders templated, color-tagged, indented lines.
//!
//! A template mixes plain text with two kinds of markers:
//!
//! - color tags such as `{{red}}`, `{{gray}}` or `{{/}}` (reset), resolved
//!   into ANSI escapes or stripped depending on the [`ColorMode`];
//! - positional placeholders `{}`, `{:>N}` (right-justified to `N` chars) and
//!   `{:<N}` / `{:N}` (left-justified), filled from the argument list in order.
//!
//! Tags are only recognized in the template itself, never inside argument text.
//!
//! 渲染带有模板、颜色标签和缩进的文本行。
//! 颜色标签根据 [`ColorMode`] 被转换为 ANSI 转义序列或被移除；
//! 位置占位符按顺序由参数列表填充。

use colored::Color;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt::Display;

use crate::core::config::ColorMode;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
// Written out: colored downgrades TrueColor when the terminal does not advertise it.
const ORANGE: &str = "\x1b[38;2;255;165;0m";
const INDENT: &str = "  ";

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(/|[a-z][a-z-]*)\}\}").expect("tag pattern is valid"));

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?::([<>])?(\d+))?\}").expect("placeholder pattern is valid"));

/// A capability that renders templated, color-tagged, indented text lines.
///
/// Report renderers receive a formatter explicitly instead of reaching for a
/// shared global one.
pub trait Formatter {
    /// Formats `template` with `args`, indenting every non-empty line by
    /// `indentation` levels.
    fn fi(&self, indentation: usize, template: &str, args: &[&dyn Display]) -> String;

    /// Formats `template` with `args` without indentation.
    fn f(&self, template: &str, args: &[&dyn Display]) -> String {
        self.fi(0, template, args)
    }
}

/// The default [`Formatter`], driven by a [`ColorMode`].
/// 默认的 [`Formatter`] 实现，由 [`ColorMode`] 控制。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFormatter {
    mode: ColorMode,
}

impl TemplateFormatter {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    /// A formatter that never emits escapes. Handy for logs and snapshots.
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Checks whether color tags will be turned into escapes.
    pub fn colorizes(&self) -> bool {
        match self.mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// Resolves the color tags of a template. Unknown tags are kept verbatim.
    /// 解析模板中的颜色标签。未知标签保持原样。
    pub fn style(&self, template: &str) -> String {
        let colorize = self.colorizes();
        TAG_RE
            .replace_all(template, |caps: &Captures| match tag_escape(&caps[1]) {
                Some(escape) if colorize => escape,
                Some(_) => String::new(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl Formatter for TemplateFormatter {
    fn fi(&self, indentation: usize, template: &str, args: &[&dyn Display]) -> String {
        let out = substitute(&self.style(template), args);
        indent(&out, indentation)
    }
}

/// Maps a tag name to its ANSI escape sequence.
fn tag_escape(tag: &str) -> Option<String> {
    let color = match tag {
        "/" => return Some(RESET.to_string()),
        "bold" => return Some(BOLD.to_string()),
        "orange" => return Some(ORANGE.to_string()),
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::BrightBlack,
        _ => return None,
    };
    Some(format!("\x1b[{}m", color.to_fg_str()))
}

/// Fills placeholders from `args` in order. Surplus arguments are ignored.
/// Placeholders without an argument, or with a width that does not fit in a
/// `usize`, are left as they are and do not consume an argument.
fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut next = 0;
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let width = match caps.get(2).map(|m| m.as_str().parse::<usize>()) {
                None => None,
                Some(Ok(width)) => Some(width),
                Some(Err(_)) => return caps[0].to_string(),
            };
            let Some(arg) = args.get(next) else {
                return caps[0].to_string();
            };
            next += 1;

            let value = arg.to_string();
            let Some(width) = width else {
                return value;
            };
            match caps.get(1).map(|m| m.as_str()) {
                Some(">") => format!("{value:>width$}"),
                _ => format!("{value:<width$}"),
            }
        })
        .into_owned()
}

fn indent(text: &str, indentation: usize) -> String {
    if indentation == 0 {
        return text.to_string();
    }
    let prefix = INDENT.repeat(indentation);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
