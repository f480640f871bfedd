use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use suite_reporter::config::ColorMode;
use suite_reporter::models::{TestSuite, TestSuiteState, TestSuites};
use suite_reporter::reporting::{Reporter, TemplateFormatter, failed_suites_report};

fn build_suites(count: usize) -> TestSuites {
    let states = [
        TestSuiteState::Passed,
        TestSuiteState::Failed,
        TestSuiteState::FailedToCompile,
        TestSuiteState::FailedDueToTimeout,
        TestSuiteState::Skipped,
    ];
    (0..count)
        .map(|i| {
            TestSuite::with_state(
                format!("package_{i}"),
                format!("./crates/package_{i}"),
                states[i % states.len()],
            )
        })
        .collect()
}

fn bench_failed_suites_report(c: &mut Criterion) {
    let suites = build_suites(500);
    let formatter = TemplateFormatter::new(ColorMode::Always);

    c.bench_function("failed_suites_report", |b| {
        b.iter(|| failed_suites_report(black_box(&suites), &formatter));
    });

    let reporter = Reporter::new(TemplateFormatter::plain());
    c.bench_function("render_summary_and_report", |b| {
        b.iter(|| reporter.render(black_box(&suites)));
    });
}

criterion_group!(benches, bench_failed_suites_report);
criterion_main!(benches);
