use itertools::Itertools;
use tracing::debug;

use crate::{Item, Run};

/// Groups items into [`Run`]s in a single left-to-right pass.
///
/// A value extends the pending run if it equals the run's last item (a duplicate) or is exactly
/// one greater. Any other value closes the pending run and starts a new one, so the input is
/// never sorted: `[1, 2, 7, 8, 9, 4, 5]` yields the three runs `1-2`, `7-9` and `4-5`.
///
/// The iterator is lazy and yields each run as soon as it is closed.
#[must_use]
pub fn runs<'a>(items: impl IntoIterator<Item = &'a Item>) -> impl Iterator<Item = Run> {
    items
        .into_iter()
        .map(|&item| Run::single(item))
        .coalesce(|pending, next| pending.extended_by(next.start()).ok_or((pending, next)))
}

/// Generates a [range list][crate] that can be parsed by [`collect()`][crate::collect].
///
/// Runs of consecutive or repeated items are collapsed into `start-end` ranges and all runs are
/// joined with `", "`. Item order is kept as given, see [`runs()`] for the grouping rules.
///
/// Empty input produces an empty string.
///
/// Negative items are written with a leading `-`, which [`collect()`][crate::collect] reads as a
/// range separator. Output containing negative items is therefore not accepted by `collect()`.
///
/// # Example
///
/// ```
/// assert_eq!(
///     rangelist::summarize(&[1, 3, 6, 7, 8, 12, 13, 14, 15, 21, 22, 23, 24, 31]),
///     "1, 3, 6-8, 12-15, 21-24, 31"
/// );
///
/// assert_eq!(rangelist::summarize(&[1, 1, 2, 2, 3, 3, 3]), "1-3");
/// ```
#[must_use]
pub fn summarize<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    debug!("summarizing items");

    let summary = runs(items).join(", ");

    debug!(len = summary.len(), "summarized items");

    summary
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn summarize_smoke_test() {
        assert_eq!(summarize(&[]), "");

        assert_eq!(summarize(&[5]), "5");

        assert_eq!(summarize(&[1, 2, 3, 4, 5]), "1-5");

        assert_eq!(summarize(&[555, 666]), "555, 666");

        assert_eq!(summarize(&[1, 3, 4, 5, 6, 7, 10, 11]), "1, 3-7, 10-11");

        assert_eq!(
            summarize(&[1, 3, 6, 7, 8, 12, 13, 14, 15, 21, 22, 23, 24, 31]),
            "1, 3, 6-8, 12-15, 21-24, 31"
        );

        assert_eq!(summarize(&[1, 3, 5, 7, 9, 13]), "1, 3, 5, 7, 9, 13");
    }

    #[test]
    fn duplicates_are_collapsed() {
        assert_eq!(summarize(&[1, 1, 2, 2, 3, 3, 3]), "1-3");

        assert_eq!(summarize(&[4, 4, 4]), "4");
    }

    #[test]
    fn order_is_not_changed() {
        assert_eq!(summarize(&[1, 2, 7, 8, 9, 4, 5]), "1-2, 7-9, 4-5");

        assert_eq!(summarize(&[3, 2, 1]), "3, 2, 1");

        // A repeat of an earlier run does not join it.
        assert_eq!(summarize(&[1, 2, 3, 1, 2, 3]), "1-3, 1-3");
    }

    #[test]
    fn negative_items() {
        assert_eq!(summarize(&[-3, -2, -1, 0, 1, 5]), "-3-1, 5");
    }

    #[test]
    fn max_item_does_not_overflow() {
        assert_eq!(summarize(&[Item::MAX, Item::MAX]), "2147483647");

        assert_eq!(
            summarize(&[Item::MAX - 1, Item::MAX, Item::MIN]),
            "2147483646-2147483647, -2147483648"
        );
    }

    #[test]
    fn runs_expose_boundaries() {
        let found = runs(&[1, 2, 7, 8, 9, 4, 5])
            .map(|run| (run.start(), run.end()))
            .collect::<Vec<_>>();

        assert_eq!(found, vec![(1, 2), (7, 9), (4, 5)]);
    }

    #[test]
    fn runs_of_empty_input_is_empty() {
        assert_eq!(runs(&[]).count(), 0);
    }
}
