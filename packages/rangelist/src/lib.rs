#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Utilities for parsing and summarizing integer lists written in a compact human-readable
//! notation of comma-separated values and hyphenated ranges.
//!
//! Example range list string: `1, 3, 6-8, 12-15`
//!
//! # Format
//!
//! The value is a comma-separated list of zero or more items, where each item is either:
//!
//! * a single integer (e.g. `1`)
//! * an inclusive range of integers (e.g. `6-8`, equivalent to `6, 7, 8`)
//!
//! Whitespace around items and around range endpoints is ignored.
//!
//! The items in the list are of type `i32`. Because `-` separates range endpoints, negative
//! numbers cannot be written in a range list.
//!
//! # Collecting and summarizing
//!
//! [`collect()`] expands a range list into its items, keeping the order in which they were written
//! and keeping duplicates. Parsing is all-or-nothing: any malformed part fails the whole call.
//!
//! [`summarize()`] does the reverse. It scans the items once, in the given order, collapsing runs
//! of repeated or consecutive ascending items into ranges. Items are never sorted, so out-of-order
//! input produces one range per ascending run.
//!
//! ```
//! let items = rangelist::collect("1,3,6,7,8,12,13,14,15,21,22,23,24,31").unwrap();
//! assert_eq!(rangelist::summarize(&items), "1, 3, 6-8, 12-15, 21-24, 31");
//!
//! let items = rangelist::collect("1-2, 7-9, 4-5").unwrap();
//! assert_eq!(items, vec![1, 2, 7, 8, 9, 4, 5]);
//! assert_eq!(rangelist::summarize(&items), "1-2, 7-9, 4-5");
//! ```
//!
//! # Diagnostics
//!
//! Both operations emit `tracing` events. To route them to a specific subscriber without
//! installing it for the whole thread or process, use a [`Summarizer`]:
//!
//! ```
//! use rangelist::Summarizer;
//!
//! let summarizer = Summarizer::builder()
//!     .diagnostics(tracing_subscriber::fmt().finish())
//!     .build();
//!
//! assert_eq!(summarizer.collect("1, 3-5").unwrap(), vec![1, 3, 4, 5]);
//! ```

mod collect;
mod error;
mod run;
mod summarize;
mod summarizer;
mod summarizer_builder;

pub use collect::*;
pub use error::*;
pub use run::*;
pub use summarize::*;
pub use summarizer::*;
pub use summarizer_builder::*;

pub(crate) type Item = i32;
