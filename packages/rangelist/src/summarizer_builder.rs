use tracing::Dispatch;

use crate::Summarizer;

/// Creates instances of [`Summarizer`].
///
/// All parameters are optional. Use `Summarizer::builder()` to create a new instance of this
/// builder.
#[derive(Debug, Default)]
pub struct SummarizerBuilder {
    /// Receives the diagnostic events of every call made through the built `Summarizer`.
    /// Defaults to the dispatcher that is current on the calling thread.
    diagnostics: Option<Dispatch>,
}

impl SummarizerBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Routes diagnostic events to the given dispatcher or subscriber.
    ///
    /// # Example
    ///
    /// ```
    /// use rangelist::Summarizer;
    ///
    /// let subscriber = tracing_subscriber::fmt()
    ///     .with_max_level(tracing::Level::DEBUG)
    ///     .finish();
    ///
    /// let summarizer = Summarizer::builder().diagnostics(subscriber).build();
    ///
    /// assert_eq!(summarizer.summarize(&[1, 2, 3]), "1-3");
    /// ```
    #[must_use]
    pub fn diagnostics(self, dispatch: impl Into<Dispatch>) -> Self {
        Self {
            diagnostics: Some(dispatch.into()),
        }
    }

    /// Builds the `Summarizer`.
    #[must_use]
    pub fn build(self) -> Summarizer {
        Summarizer::new(self.diagnostics)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn builds_without_diagnostics() {
        let summarizer = SummarizerBuilder::new().build();

        assert_eq!(summarizer.summarize(&[6, 7, 8]), "6-8");
    }

    #[test]
    fn accepts_dispatch() {
        let summarizer = SummarizerBuilder::new()
            .diagnostics(Dispatch::none())
            .build();

        assert_eq!(summarizer.collect("6-8").unwrap(), vec![6, 7, 8]);
    }
}
