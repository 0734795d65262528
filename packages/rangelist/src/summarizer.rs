use tracing::Dispatch;
use tracing::dispatcher;

use crate::{Item, SummarizerBuilder};

/// Performs [`collect()`][crate::collect] and [`summarize()`][crate::summarize] with diagnostic
/// events routed to a caller-provided `tracing` dispatcher.
///
/// The free functions emit their events to whatever dispatcher is current on the calling thread.
/// A `Summarizer` configured with [`SummarizerBuilder::diagnostics()`] instead scopes that
/// dispatcher to each call, without installing anything process-wide. Without a configured
/// dispatcher it behaves exactly like the free functions.
///
/// # Example
///
/// ```
/// use rangelist::Summarizer;
///
/// let summarizer = Summarizer::builder()
///     .diagnostics(tracing::Dispatch::none())
///     .build();
///
/// let items = summarizer.collect("1-2, 7-9, 4-5").unwrap();
/// assert_eq!(summarizer.summarize(&items), "1-2, 7-9, 4-5");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Summarizer {
    diagnostics: Option<Dispatch>,
}

impl Summarizer {
    /// Starts building a new `Summarizer`.
    #[must_use]
    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::new()
    }

    pub(crate) const fn new(diagnostics: Option<Dispatch>) -> Self {
        Self { diagnostics }
    }

    /// Parses a [range list][crate], see [`collect()`][crate::collect].
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`collect()`][crate::collect].
    pub fn collect<'a>(&self, text: impl Into<Option<&'a str>>) -> crate::Result<Vec<Item>> {
        self.with_diagnostics(|| crate::collect(text))
    }

    /// Generates a [range list][crate], see [`summarize()`][crate::summarize].
    #[must_use]
    pub fn summarize<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> String {
        self.with_diagnostics(|| crate::summarize(items))
    }

    fn with_diagnostics<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.diagnostics {
            Some(dispatch) => dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}
