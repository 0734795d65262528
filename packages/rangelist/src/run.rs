use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;

use crate::Item;

/// A closed interval of items found by [`runs()`][crate::runs], collapsing consecutive and
/// duplicate values.
///
/// The textual form (via [`Display`]) is `start` for a single-item run and `start-end` otherwise.
///
/// # Example
///
/// ```
/// let runs: Vec<_> = rangelist::runs(&[6, 7, 8, 12]).collect();
///
/// assert_eq!(runs[0].start(), 6);
/// assert_eq!(runs[0].end(), 8);
/// assert_eq!(runs[0].to_string(), "6-8");
/// assert_eq!(runs[1].to_string(), "12");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Run {
    start: Item,

    // Always >= start.
    end: Item,
}

impl Run {
    pub(crate) const fn single(item: Item) -> Self {
        Self {
            start: item,
            end: item,
        }
    }

    /// The first item of the run.
    #[must_use]
    pub const fn start(self) -> Item {
        self.start
    }

    /// The last item of the run (inclusive).
    #[must_use]
    pub const fn end(self) -> Item {
        self.end
    }

    /// Returns the run extended by `item` if `item` repeats the end of the run or directly
    /// follows it, otherwise `None`.
    pub(crate) fn extended_by(self, item: Item) -> Option<Self> {
        let continues = item == self.end || self.end.checked_add(1) == Some(item);

        continues.then_some(Self { end: item, ..self })
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl From<Run> for RangeInclusive<Item> {
    fn from(run: Run) -> Self {
        run.start..=run.end
    }
}
