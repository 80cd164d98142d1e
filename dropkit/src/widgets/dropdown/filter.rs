//! Search filtering using nucleo-matcher.
//!
//! Unlike a fuzzy finder, the dropdown narrows by case-insensitive substring
//! and keeps the original order: no scoring, no reordering.

use std::borrow::Cow;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::option::DropdownOption;

/// Case-insensitive substring matcher for option labels.
///
/// ASCII labels go through nucleo. Its substring atom only finds matches at
/// the start of a Unicode haystack, so other labels are compared after
/// lowercasing.
pub struct LabelMatcher {
    atom: Atom,
    matcher: Matcher,
    buf: Vec<char>,
    folded_query: String,
    ascii_query: bool,
}

impl LabelMatcher {
    /// Create a matcher for a non-empty query.
    pub fn new(query: &str) -> Self {
        Self {
            atom: Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Never,
                AtomKind::Substring,
                false,
            ),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
            folded_query: query.to_lowercase(),
            ascii_query: query.is_ascii(),
        }
    }

    /// Check if `label` contains the query.
    pub fn matches(&mut self, label: &str) -> bool {
        if self.ascii_query && label.is_ascii() {
            let haystack = Utf32Str::new(label, &mut self.buf);
            return self.atom.score(haystack, &mut self.matcher).is_some();
        }
        label.to_lowercase().contains(&self.folded_query)
    }
}

impl std::fmt::Debug for LabelMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelMatcher").finish_non_exhaustive()
    }
}

/// Indices of the options whose label contains `query`, in original order.
///
/// Empty query returns every index.
pub fn matching_indices(options: &[DropdownOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let mut matcher = LabelMatcher::new(query);
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| matcher.matches(&option.label))
        .map(|(index, _)| index)
        .collect()
}

/// Narrow `options` to those whose label contains `query`.
///
/// Empty query borrows the input unchanged, so callers can skip downstream
/// recomputation.
///
/// # Example
///
/// ```ignore
/// let filtered = filter_options(&fruits, "an");
/// // Returns: [Banana]
/// ```
pub fn filter_options<'a>(options: &'a [DropdownOption], query: &str) -> Cow<'a, [DropdownOption]> {
    if query.is_empty() {
        return Cow::Borrowed(options);
    }

    let mut matcher = LabelMatcher::new(query);
    Cow::Owned(
        options
            .iter()
            .filter(|option| matcher.matches(&option.label))
            .cloned()
            .collect(),
    )
}
