use std::ops::RangeInclusive;

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{Error, Item};

/// Parses a [range list][crate] and returns the numeric items in the order they appear,
/// expanding ranges and keeping duplicates.
///
/// Empty or absent (`None`) input is valid and returns an empty result.
///
/// Whitespace around tokens and around range endpoints is ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedNumber`] if a token or range endpoint is not a valid integer
/// (this includes empty tokens such as the middle of `1,,2`).
///
/// Returns [`Error::MalformedRange`] if a token contains more than one `-` or if the start of a
/// range is greater than its end.
///
/// No partial result is ever returned: a single bad token rejects the whole input.
///
/// # Example
///
/// ```
/// let items = rangelist::collect("1, 3-7, 10-11").unwrap();
/// assert_eq!(items, vec![1, 3, 4, 5, 6, 7, 10, 11]);
///
/// assert!(rangelist::collect(None).unwrap().is_empty());
/// assert!(rangelist::collect("1,2,3,four,5").is_err());
/// ```
pub fn collect<'a>(text: impl Into<Option<&'a str>>) -> crate::Result<Vec<Item>> {
    let text = text.into().unwrap_or_default();

    debug!(len = text.len(), "collecting items from range list");

    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(collect_token)
        .flatten_ok()
        .collect::<crate::Result<Vec<_>>>()
        .inspect(|items| debug!(count = items.len(), "collected items"))
        .inspect_err(|error| warn!(%error, "range list rejected"))
}

fn collect_token(token: &str) -> crate::Result<RangeInclusive<Item>> {
    let token = token.trim();

    trace!(token, "collecting token");

    if token.contains('-') {
        collect_range(token)
    } else {
        parse_item(token).map(|item| item..=item)
    }
}

fn collect_range(token: &str) -> crate::Result<RangeInclusive<Item>> {
    let mut endpoints = token.split('-');

    let (Some(start), Some(end), None) = (endpoints.next(), endpoints.next(), endpoints.next())
    else {
        return Err(Error::MalformedRange {
            invalid_value: token.to_string(),
            problem: "a range must have exactly two endpoints separated by '-'".to_string(),
        });
    };

    let start = parse_item(start)?;
    let end = parse_item(end)?;

    if start > end {
        return Err(Error::MalformedRange {
            invalid_value: token.to_string(),
            problem: "range start must be <= end".to_string(),
        });
    }

    Ok(start..=end)
}

fn parse_item(part: &str) -> crate::Result<Item> {
    let part = part.trim();

    part.parse::<Item>()
        .map_err(|source| Error::MalformedNumber {
            invalid_value: part.to_string(),
            source,
        })
}
