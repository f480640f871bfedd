//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the suite reporter.
//! It includes the terminal states a suite can reach, the per-suite record and
//! the ordered collection the reporter consumes.
//!
//! 此模块定义了整个套件报告器中使用的核心数据结构。
//! 它包括套件可以达到的终止状态、单个套件的记录以及报告器使用的有序集合。

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The reason interpolated into the report line of a suite that timed out.
/// 超时套件在报告行中插入的原因说明。
pub const TIMEOUT_ELAPSED_FAILURE_REASON: &str = "Suite did not run because the timeout elapsed";

/// Enumerates the possible outcomes of a test suite.
/// 枚举测试套件的可能结果。
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestSuiteState {
    /// Discovered but not resolved yet, or deliberately not run.
    /// 已发现但尚未确定结果，或被有意不运行。
    #[default]
    Pending,
    /// Every spec in the suite passed.
    /// 套件中的所有用例均通过。
    Passed,
    /// The suite ran and at least one spec failed.
    /// 套件已运行且至少有一个用例失败。
    Failed,
    /// The suite could not be compiled.
    /// 套件无法编译。
    FailedToCompile,
    /// The suite never ran because the overall timeout elapsed.
    /// 由于整体超时，套件未能运行。
    FailedDueToTimeout,
    /// The suite was skipped without being executed.
    /// 套件被跳过，未执行。
    Skipped,
}

impl TestSuiteState {
    /// The states that count as a failure for reporting purposes.
    /// 在报告中被视为失败的状态。
    pub const FAILURE_STATES: [TestSuiteState; 3] = [
        TestSuiteState::Failed,
        TestSuiteState::FailedToCompile,
        TestSuiteState::FailedDueToTimeout,
    ];

    /// Checks if the state is one of the failure states.
    pub fn is_failure(&self) -> bool {
        match self {
            TestSuiteState::Failed
            | TestSuiteState::FailedToCompile
            | TestSuiteState::FailedDueToTimeout => true,
            TestSuiteState::Passed | TestSuiteState::Skipped | TestSuiteState::Pending => false,
        }
    }

    /// Checks if the suite has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, TestSuiteState::Pending)
    }

    /// Gets the snake_case name of the state, as used in manifests.
    /// 获取状态的 snake_case 名称，与清单文件中使用的一致。
    pub fn as_str(&self) -> &'static str {
        match self {
            TestSuiteState::Pending => "pending",
            TestSuiteState::Passed => "passed",
            TestSuiteState::Failed => "failed",
            TestSuiteState::FailedToCompile => "failed_to_compile",
            TestSuiteState::FailedDueToTimeout => "failed_due_to_timeout",
            TestSuiteState::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TestSuiteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents one independently executed test package or binary.
/// 表示一个独立执行的测试包或测试二进制文件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// The name of the package under test / 被测试包的名称
    pub package_name: String,
    /// Where the suite lives on disk, used for display only / 套件在磁盘上的位置，仅用于显示
    pub path: String,
    /// The outcome of the suite / 套件的结果
    #[serde(default)]
    pub state: TestSuiteState,
}

impl TestSuite {
    /// Creates a suite that has been discovered but not resolved yet.
    /// 创建一个已发现但尚未确定结果的套件。
    pub fn new(package_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            path: path.into(),
            state: TestSuiteState::Pending,
        }
    }

    /// Creates a suite that already carries its final state.
    pub fn with_state(
        package_name: impl Into<String>,
        path: impl Into<String>,
        state: TestSuiteState,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            path: path.into(),
            state,
        }
    }

    /// Assigns the terminal state of the suite.
    ///
    /// A suite may only be resolved once, and only to a terminal state.
    ///
    /// 设置套件的终止状态。套件只能被确定一次，并且只能被设置为终止状态。
    pub fn resolve(&mut self, state: TestSuiteState) -> Result<()> {
        if self.state.is_resolved() {
            bail!(
                "Suite '{}' is already resolved as '{}', cannot set it to '{}'",
                self.package_name,
                self.state,
                state
            );
        }
        if !state.is_resolved() {
            bail!("Suite '{}' cannot be resolved to '{}'", self.package_name, state);
        }
        self.state = state;
        Ok(())
    }

    /// Checks if the suite ended in one of the failure states.
    /// 检查套件是否以失败状态结束。
    pub fn is_failure(&self) -> bool {
        self.state.is_failure()
    }
}

/// Per-state counts over a collection of suites.
/// 一组套件中每种状态的数量统计。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Suites that passed / 通过的套件数
    pub passed: usize,
    /// Suites that ran and failed / 运行后失败的套件数
    pub failed: usize,
    /// Suites that did not compile / 编译失败的套件数
    pub failed_to_compile: usize,
    /// Suites that never ran because of the timeout / 因超时未运行的套件数
    pub failed_due_to_timeout: usize,
    /// Suites skipped without running / 被跳过的套件数
    pub skipped: usize,
    /// Suites not resolved yet / 尚未确定结果的套件数
    pub pending: usize,
}

impl SuiteSummary {
    /// Number of suites counted, whatever their state.
    /// 统计的套件总数，不论状态。
    pub fn total(&self) -> usize {
        self.passed + self.failures() + self.skipped + self.pending
    }

    /// Number of suites in any failure state.
    pub fn failures(&self) -> usize {
        self.failed + self.failed_to_compile + self.failed_due_to_timeout
    }

    fn record(&mut self, state: TestSuiteState) {
        match state {
            TestSuiteState::Passed => self.passed += 1,
            TestSuiteState::Failed => self.failed += 1,
            TestSuiteState::FailedToCompile => self.failed_to_compile += 1,
            TestSuiteState::FailedDueToTimeout => self.failed_due_to_timeout += 1,
            TestSuiteState::Skipped => self.skipped += 1,
            TestSuiteState::Pending => self.pending += 1,
        }
    }
}

/// An ordered collection of suites. Order is significant and preserved by
/// every filtering operation.
///
/// 有序的套件集合。顺序是有意义的，所有过滤操作都会保留原有顺序。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestSuites(Vec<TestSuite>);

impl TestSuites {
    /// Creates an empty collection.
    /// 创建一个空集合。
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a suite after the ones already present.
    /// 在已有套件之后追加一个套件。
    pub fn push(&mut self, suite: TestSuite) {
        self.0.push(suite);
    }

    /// Number of suites in the collection / 集合中的套件数量
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestSuite> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TestSuite> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[TestSuite] {
        &self.0
    }

    /// Returns the suites whose state is in `states`, in their original order.
    /// 返回状态属于 `states` 的套件，保持原有顺序。
    pub fn with_state(&self, states: &[TestSuiteState]) -> TestSuites {
        self.iter()
            .filter(|suite| states.contains(&suite.state))
            .cloned()
            .collect()
    }

    /// Returns the suites whose state is not in `states`, in their original order.
    /// 返回状态不属于 `states` 的套件，保持原有顺序。
    pub fn without_state(&self, states: &[TestSuiteState]) -> TestSuites {
        self.iter()
            .filter(|suite| !states.contains(&suite.state))
            .cloned()
            .collect()
    }

    /// Counts the suites whose state is in `states`.
    /// 统计状态属于 `states` 的套件数量。
    pub fn count_with_state(&self, states: &[TestSuiteState]) -> usize {
        self.iter()
            .filter(|suite| states.contains(&suite.state))
            .count()
    }

    /// Checks if any suite is in a failure state.
    pub fn has_failures(&self) -> bool {
        self.iter().any(TestSuite::is_failure)
    }

    /// Number of suites still waiting for a terminal state.
    pub fn unresolved(&self) -> usize {
        self.count_with_state(&[TestSuiteState::Pending])
    }

    /// Returns a copy sorted by package name. The sort is stable, so suites
    /// sharing a name keep their relative order.
    ///
    /// 返回按包名排序的副本。排序是稳定的，同名套件保持相对顺序。
    pub fn sorted_by_package_name(&self) -> TestSuites {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| a.package_name.cmp(&b.package_name));
        TestSuites(sorted)
    }

    /// Counts the suites per state.
    /// 按状态统计套件数量。
    pub fn summary(&self) -> SuiteSummary {
        self.iter().fold(SuiteSummary::default(), |mut summary, suite| {
            summary.record(suite.state);
            summary
        })
    }
}

impl From<Vec<TestSuite>> for TestSuites {
    fn from(suites: Vec<TestSuite>) -> Self {
        Self(suites)
    }
}

impl FromIterator<TestSuite> for TestSuites {
    fn from_iter<I: IntoIterator<Item = TestSuite>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TestSuites {
    type Item = TestSuite;
    type IntoIter = std::vec::IntoIter<TestSuite>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TestSuites {
    type Item = &'a TestSuite;
    type IntoIter = std::slice::Iter<'a, TestSuite>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
