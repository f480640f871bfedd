//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders the outcome of a multi-suite run as text for the console.
//! It builds the aligned list of failed suites and a one-line run summary. Every
//! function returns a `String`; printing is left to the caller.
//!
//! 此模块将多套件运行的结果渲染为控制台文本。
//! 它生成对齐的失败套件列表和单行的运行摘要。所有函数都返回 `String`，由调用方负责输出。

use crate::core::config::{ReportConfig, SuiteOrder};
use crate::core::models::{TIMEOUT_ELAPSED_FAILURE_REASON, TestSuite, TestSuiteState, TestSuites};
use crate::infra::i18n::{DEFAULT_LOCALE, resolve_locale};
use crate::infra::t;
use crate::infra::text::pluralized_word;
use crate::reporting::formatter::{Formatter, TemplateFormatter};

/// Renders the report of failed suites with the default locale and the
/// default timeout reason, keeping the suites in their given order.
///
/// # Arguments / 参数
/// * `suites` - The suites of the run, in the order they should be listed
///              本次运行的套件，按应列出的顺序排列
/// * `formatter` - Resolves the color tags and placeholders of each line
///                 解析每一行的颜色标签和占位符
///
/// # Output Format / 输出格式
/// ```text
/// There were failures detected in the following suites:
///         Pkg ./pkg
///   LongerPkg ./longer [Compilation failure]
/// ```
pub fn failed_suites_report<F: Formatter + ?Sized>(suites: &TestSuites, formatter: &F) -> String {
    render_failed_suites(
        suites.as_slice(),
        formatter,
        DEFAULT_LOCALE,
        TIMEOUT_ELAPSED_FAILURE_REASON,
    )
}

/// Produces the header followed by one line per failed suite.
///
/// The package-name column is right-justified to the longest name among
/// failed suites only; suites in any other state neither appear nor affect
/// the width.
fn render_failed_suites<F: Formatter + ?Sized>(
    suites: &[TestSuite],
    f: &F,
    locale: &str,
    timeout_reason: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&t!("report.failures_header", locale = locale));
    out.push('\n');

    let max_package_name_length = suites
        .iter()
        .filter(|suite| suite.is_failure())
        .map(|suite| suite.package_name.chars().count())
        .max()
        .unwrap_or(0);

    let package_name_formatter = format!("{{:>{max_package_name_length}}}");
    let compilation_failure = t!("report.compilation_failure", locale = locale);

    for suite in suites {
        let line = match suite.state {
            TestSuiteState::Failed => f.fi(
                1,
                &("{{red}}".to_owned() + &package_name_formatter + " {{gray}}{}{{/}}\n"),
                &[&suite.package_name, &suite.path],
            ),
            TestSuiteState::FailedToCompile => f.fi(
                1,
                &("{{red}}".to_owned()
                    + &package_name_formatter
                    + " {{gray}}{} {{magenta}}[{}]{{/}}\n"),
                &[&suite.package_name, &suite.path, &compilation_failure],
            ),
            TestSuiteState::FailedDueToTimeout => f.fi(
                1,
                &("{{red}}".to_owned()
                    + &package_name_formatter
                    + " {{gray}}{} {{orange}}[{}]{{/}}\n"),
                &[&suite.package_name, &suite.path, &timeout_reason],
            ),
            TestSuiteState::Passed | TestSuiteState::Skipped | TestSuiteState::Pending => {
                continue;
            }
        };
        out.push_str(&line);
    }
    out
}

/// Renders reports with an explicitly supplied formatter.
///
/// 使用显式提供的格式化器渲染报告。
#[derive(Debug, Clone)]
pub struct Reporter<F: Formatter> {
    formatter: F,
    locale: String,
    order: SuiteOrder,
    timeout_reason: String,
}

impl<F: Formatter> Reporter<F> {
    /// Creates a reporter with the English locale, the given suite order and
    /// the default timeout reason.
    ///
    /// 创建一个使用英文、保持套件给定顺序并使用默认超时原因的报告器。
    pub fn new(formatter: F) -> Self {
        Self {
            formatter,
            locale: DEFAULT_LOCALE.to_string(),
            order: SuiteOrder::Given,
            timeout_reason: TIMEOUT_ELAPSED_FAILURE_REASON.to_string(),
        }
    }

    /// Sets the locale of report messages. The value is used as given; see
    /// [`resolve_locale`] for matching against the bundled translations.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the order in which failed suites are listed.
    /// 设置失败套件的列出顺序。
    pub fn with_order(mut self, order: SuiteOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the reason shown for suites that timed out. It is printed verbatim.
    pub fn with_timeout_reason(mut self, reason: impl Into<String>) -> Self {
        self.timeout_reason = reason.into();
        self
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Renders the header and one aligned line per failed suite.
    /// 渲染报告头以及每个失败套件对应的一行对齐文本。
    pub fn failed_suites_report(&self, suites: &TestSuites) -> String {
        tracing::debug!(
            suites = suites.len(),
            failures = suites.count_with_state(&TestSuiteState::FAILURE_STATES),
            order = ?self.order,
            "rendering failed suites report"
        );

        let sorted;
        let ordered = match self.order {
            SuiteOrder::Given => suites.as_slice(),
            SuiteOrder::PackageName => {
                sorted = suites.sorted_by_package_name();
                sorted.as_slice()
            }
        };
        render_failed_suites(ordered, &self.formatter, &self.locale, &self.timeout_reason)
    }

    /// Renders a one-line count of the run's outcomes.
    ///
    /// ```text
    /// Ran 5 suites: 3 passed, 1 failed, 1 skipped, 0 pending
    /// ```
    pub fn summary(&self, suites: &TestSuites) -> String {
        let summary = suites.summary();
        let total = summary.total();
        let singular = t!("report.suite_singular", locale = &self.locale);
        let plural = t!("report.suite_plural", locale = &self.locale);
        let noun = pluralized_word(&singular, &plural, total);

        let template = t!("report.summary", locale = &self.locale).into_owned() + "\n";
        self.formatter.f(
            &template,
            &[
                &total,
                &noun,
                &summary.passed,
                &summary.failures(),
                &summary.skipped,
                &summary.pending,
            ],
        )
    }

    /// Renders the summary, followed by the failed suites report when any
    /// suite failed.
    pub fn render(&self, suites: &TestSuites) -> String {
        let mut out = self.summary(suites);
        if suites.has_failures() {
            out.push_str(&self.failed_suites_report(suites));
        }
        out
    }
}

impl Reporter<TemplateFormatter> {
    /// Builds a reporter from a loaded configuration, resolving the locale
    /// against the bundled translations.
    pub fn from_config(config: &ReportConfig) -> Self {
        let mut reporter = Reporter::new(TemplateFormatter::new(config.color))
            .with_locale(resolve_locale(config.language.as_deref()))
            .with_order(config.order);
        if let Some(reason) = &config.timeout_reason {
            reporter = reporter.with_timeout_reason(reason.clone());
        }
        reporter
    }
}
