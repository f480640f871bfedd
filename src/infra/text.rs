//! Text helpers shared by the report renderers.

/// Picks the singular or plural form of a word for `count`.
///
/// Only a count of exactly one takes the singular; zero is plural.
///
/// ```
/// use suite_reporter::infra::text::pluralized_word;
///
/// assert_eq!(pluralized_word("suite", "suites", 1), "suite");
/// assert_eq!(pluralized_word("suite", "suites", 0), "suites");
/// ```
pub fn pluralized_word<'a>(singular: &'a str, plural: &'a str, count: usize) -> &'a str {
    if count == 1 { singular } else { plural }
}
