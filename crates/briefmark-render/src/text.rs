//! Inline and paragraph rewrites.
//!
//! - Bold: the shortest `**...**` span on a line becomes `strong`.
//! - Paragraphs: each non-empty line not already starting with a tag
//!   is wrapped in `p`, taking its line terminator with it. Every
//!   newline left after that becomes a `<br />`.

use std::sync::LazyLock;

use briefmark_core::Element;
use regex::{Captures, Regex};

use crate::markup::LINE_BREAK;
use crate::Markup;

/// Regex for a bold span (non-greedy, never crosses a line)
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Regex for a line that is not markup yet, with its terminator if any
static PLAIN_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([^<\n].*)\n?").unwrap());

/// Rewrite every `**...**` span, left to right.
///
/// Unbalanced markers stay literal.
pub fn bold(input: &str, markup: &Markup) -> String {
    BOLD_RE
        .replace_all(input, |caps: &Captures| markup.wrap(Element::Strong, &caps[1]))
        .into_owned()
}

/// Wrap plain lines in paragraphs, then turn remaining newlines into
/// line breaks.
pub fn paragraphs(input: &str, markup: &Markup) -> String {
    PLAIN_LINE_RE
        .replace_all(input, |caps: &Captures| markup.wrap(Element::Paragraph, &caps[1]))
        .replace('\n', LINE_BREAK)
}
