//! # Formatter Module Unit Tests / Formatter 模块单元测试
//!
//! Tests for color tag resolution, placeholder substitution and indentation.
//!
//! 测试颜色标签解析、占位符替换和缩进。

use suite_reporter::config::ColorMode;
use suite_reporter::reporting::{Formatter, TemplateFormatter};

#[cfg(test)]
mod style_tests {
    use super::*;

    #[test]
    fn test_plain_mode_strips_known_tags() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.style("{{red}}x{{/}} {{gray}}y{{/}}"), "x y");
        assert!(!f.colorizes());
    }

    #[test]
    fn test_unknown_tags_are_kept() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.style("{{sparkle}}x{{/}}"), "{{sparkle}}x");
    }

    #[test]
    fn test_always_mode_emits_escapes() {
        let f = TemplateFormatter::new(ColorMode::Always);
        assert!(f.colorizes());
        assert_eq!(f.style("{{red}}x{{/}}"), "\x1b[31mx\x1b[0m");
        assert_eq!(f.style("{{gray}}y"), "\x1b[90my");
        assert_eq!(f.style("{{magenta}}z"), "\x1b[35mz");
        assert_eq!(f.style("{{orange}}w"), "\x1b[38;2;255;165;0mw");
        assert_ne!(f.style("{{orange}}"), f.style("{{yellow}}"));
    }

    #[test]
    fn test_default_mode_is_auto() {
        assert_eq!(TemplateFormatter::default().mode(), ColorMode::Auto);
    }
}

#[cfg(test)]
mod substitution_tests {
    use super::*;

    #[test]
    fn test_positional_placeholders() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.f("{} + {} = {}", &[&1, &2, &"three"]), "1 + 2 = three");
    }

    #[test]
    fn test_width_placeholders() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.f("[{:>5}]", &[&"ab"]), "[   ab]");
        assert_eq!(f.f("[{:<5}]", &[&"ab"]), "[ab   ]");
        assert_eq!(f.f("[{:5}]", &[&"ab"]), "[ab   ]");
        // Values longer than the width are never truncated.
        assert_eq!(f.f("[{:>2}]", &[&"abcd"]), "[abcd]");
        assert_eq!(f.f("[{:>0}]", &[&""]), "[]");
    }

    #[test]
    fn test_unparsable_width_is_left_verbatim() {
        let f = TemplateFormatter::plain();
        assert_eq!(
            f.f("{:>184467440737095516160} {}", &[&"x"]),
            "{:>184467440737095516160} x"
        );
    }

    #[test]
    fn test_surplus_arguments_are_ignored() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.f("{}", &[&"a", &"b"]), "a");
    }

    #[test]
    fn test_tags_inside_arguments_are_not_resolved() {
        let f = TemplateFormatter::new(ColorMode::Always);
        assert_eq!(f.f("{}", &[&"{{red}}"]), "{{red}}");
    }

    #[test]
    fn test_placeholders_inside_arguments_are_not_expanded() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.f("{} {}", &[&"{}", &"x"]), "{} x");
    }
}

#[cfg(test)]
mod indentation_tests {
    use super::*;

    #[test]
    fn test_indents_each_non_empty_line() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.fi(1, "a\nb\n", &[]), "  a\n  b\n");
        assert_eq!(f.fi(2, "{{red}}{}{{/}}\n", &[&"x"]), "    x\n");
    }

    #[test]
    fn test_zero_indentation_matches_f() {
        let f = TemplateFormatter::plain();
        assert_eq!(f.fi(0, "x {}\n", &[&1]), f.f("x {}\n", &[&1]));
    }

    #[test]
    fn test_indentation_precedes_escapes() {
        let f = TemplateFormatter::new(ColorMode::Always);
        assert_eq!(f.fi(1, "{{red}}x{{/}}\n", &[]), "  \x1b[31mx\x1b[0m\n");
    }
}
