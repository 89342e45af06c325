//! Header rewrite.
//!
//! A line made of exactly one, two or three `#`, a single space and
//! the rest of the line becomes an `h1`/`h2`/`h3` element. Four or
//! more hashes, or a missing space, leave the line as plain text.

use std::sync::LazyLock;

use briefmark_core::HeadingLevel;
use regex::{Captures, Regex};

use crate::Markup;

/// Regex for a header line; the hash run must be followed by a space.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").unwrap());

/// Rewrite every header line.
///
/// # Arguments
/// * `input` - The document text
/// * `markup` - Tag table
///
/// # Returns
/// The text with header lines replaced by heading elements
pub fn headings(input: &str, markup: &Markup) -> String {
    HEADING_RE
        .replace_all(input, |caps: &Captures| {
            // The pattern caps the run at three hashes.
            let level = HeadingLevel::from_depth(caps[1].len()).unwrap_or(HeadingLevel::H3);
            markup.heading(level, &caps[2])
        })
        .into_owned()
}
