//! # Locale Resolution / 语言区域解析
//!
//! Chooses the locale used for report messages.
//!
//! 选择报告消息所使用的语言区域。

/// The locale used when nothing better matches.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolves a requested locale against the bundled translations.
///
/// It attempts to match the full locale (e.g., "zh-CN", in any letter case),
/// then the language code against the language part of each bundled locale
/// (e.g., "en" from "en-US", or "zh-CN" for a bare "zh"), and finally falls
/// back to "en". When no locale is requested, the system locale is detected.
///
/// 将请求的语言区域与内置翻译进行匹配。
/// 先尝试匹配完整区域（例如 "zh-CN"，不区分大小写），再将语言代码与每个内置区域的语言部分匹配
/// （例如 "en-US" 对应 "en"，"zh" 对应 "zh-CN"），最后回退到 "en"。如果未指定语言区域，则检测系统语言。
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = match requested {
        Some(locale) => locale.to_string(),
        None => sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
    };
    let available_locales = rust_i18n::available_locales!();

    if let Some(exact) = available_locales
        .iter()
        .find(|l| l.eq_ignore_ascii_case(&locale))
    {
        return exact.to_string();
    }

    let lang_code = language_part(&locale);
    if lang_code.is_empty() {
        return DEFAULT_LOCALE.to_string();
    }

    // Prefer a bundled locale that is exactly the language ("en") over a
    // regional one sharing it.
    available_locales
        .iter()
        .find(|l| l.eq_ignore_ascii_case(lang_code))
        .or_else(|| {
            available_locales
                .iter()
                .find(|l| language_part(l).eq_ignore_ascii_case(lang_code))
        })
        .map(|l| l.to_string())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn language_part(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or_default()
}
