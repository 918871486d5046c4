use tracing::debug;

use crate::pattern::Pattern;

/// First pattern whose fields all match their expected length, or the first
/// candidate when none does.
///
/// # Panics
///
/// Panics if `patterns` is empty.
pub fn select<'p, 'a>(text: &str, patterns: &'p [Pattern<'a>]) -> &'p Pattern<'a> {
    assert!(!patterns.is_empty(), "at least one candidate pattern is required");
    let chosen = patterns
        .iter()
        .find(|pattern| pattern.fully_matches(text))
        .unwrap_or(&patterns[0]);
    debug!(pattern = %chosen.kind(), "selected pattern");
    chosen
}
