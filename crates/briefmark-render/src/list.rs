//! List rewrites.
//!
//! Three passes cooperate to turn marker lines into lists:
//! - [`list_items`] replaces `- text` and `N. text` lines with items
//! - [`stitch_items`] drops the newline between two adjacent items
//! - [`group_lists`] wraps each run of stitched items in `ul` or `ol`
//!
//! A run takes its kind from its first item, so `- a` followed by
//! `1. b` is a single bullet list.

use std::sync::LazyLock;

use briefmark_core::ListKind;
use log::trace;
use regex::{Captures, Regex};

use crate::markup::ITEM_CLOSE;
use crate::Markup;

/// Regex for a hyphen item line. The indent is any whitespace except a
/// newline (NBSP and em-space included), so it stays on its line.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\S\n]*- (.*)$").unwrap());

/// Regex for a numeral item line (ASCII digits only).
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\S\n]*[0-9]+\. (.*)$").unwrap());

/// Replace marker lines with item elements; bullets first, then numerals.
pub fn list_items(input: &str, markup: &Markup) -> String {
    let bullets = BULLET_RE.replace_all(input, |caps: &Captures| {
        markup.wrap(ListKind::Bullet.item_element(), &caps[1])
    });
    NUMBERED_RE
        .replace_all(&bullets, |caps: &Captures| {
            markup.wrap(ListKind::Numbered.item_element(), &caps[1])
        })
        .into_owned()
}

/// Remove the line break between an item's close and the next item's open.
pub fn stitch_items(input: &str, markup: &Markup) -> String {
    const SEAM: &str = "</li>\n";

    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for (idx, _) in input.match_indices(SEAM) {
        let next = idx + SEAM.len();
        if markup.item_at(&input[next..]).is_some() {
            out.push_str(&input[last..idx + ITEM_CLOSE.len()]);
            last = next;
        }
    }
    out.push_str(&input[last..]);
    out
}

/// Wrap every run of adjacent items in its list element.
///
/// Scans forward from one run to the next, so every disjoint block
/// in the document is wrapped exactly once. An item opening tag with
/// no closing tag is copied through unchanged, along with everything
/// after it: no `</li>` follows, so no later run can close either.
pub fn group_lists(input: &str, markup: &Markup) -> String {
    let mut out = String::with_capacity(input.len() + 64);
    let mut rest = input;
    let mut groups = 0usize;

    while let Some((start, kind)) = markup.find_item(rest) {
        out.push_str(&rest[..start]);
        let run = &rest[start..];
        let end = run_len(run, markup);

        if end == 0 {
            trace!("unclosed {} item at byte {}", kind, input.len() - run.len());
            rest = run;
            break;
        }

        out.push_str(&markup.wrap(kind.list_element(), &run[..end]));
        rest = &run[end..];
        groups += 1;
    }
    out.push_str(rest);

    trace!("grouped {} list run(s)", groups);
    out
}

/// Length in bytes of the item run at the start of `run`.
///
/// The run continues while an item's `</li>` is directly followed by
/// another item opening tag; anything else (a newline, a heading, a
/// closing list tag, text, end of input) ends it.
fn run_len(run: &str, markup: &Markup) -> usize {
    let mut end = 0;
    while let Some(kind) = markup.item_at(&run[end..]) {
        let body = end + markup.open(kind.item_element()).len();
        match run[body..].find(ITEM_CLOSE) {
            Some(close) => end = body + close + ITEM_CLOSE.len(),
            None => break,
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    const UL: &str = r#"<ul class="my-2 space-y-1">"#;
    const OL: &str = r#"<ol class="my-2 space-y-1">"#;
    const BI: &str = r#"<li class="ml-6 list-disc">"#;
    const NI: &str = r#"<li class="ml-6 list-decimal">"#;

    fn markup() -> Markup {
        Markup::default()
    }

    fn all(input: &str) -> String {
        let m = markup();
        group_lists(&stitch_items(&list_items(input, &m), &m), &m)
    }

    #[test]
    fn test_bullet_item() {
        assert_eq!(list_items("- one", &markup()), format!("{BI}one</li>"));
    }

    #[test]
    fn test_numbered_item() {
        assert_eq!(list_items("12. twelve", &markup()), format!("{NI}twelve</li>"));
    }

    #[test]
    fn test_indented_items() {
        assert_eq!(
            list_items("  - a\n\t3. b", &markup()),
            format!("{BI}a</li>\n{NI}b</li>")
        );
    }

    #[test]
    fn test_marker_without_text_not_an_item() {
        assert_eq!(list_items("-\n1.\n-x\n1.x", &markup()), "-\n1.\n-x\n1.x");
    }

    #[test]
    fn test_unicode_space_indent() {
        assert_eq!(list_items("\u{a0}- a", &markup()), format!("{BI}a</li>"));
        assert_eq!(
            all("\u{2003}1. x\n2. y"),
            format!("{OL}{NI}x</li>{NI}y</li></ol>")
        );
    }

    #[test]
    fn test_blank_line_before_item_kept() {
        assert_eq!(list_items("a\n\n- b", &markup()), format!("a\n\n{BI}b</li>"));
    }

    #[test]
    fn test_numeral_inside_bullet_text() {
        assert_eq!(list_items("- 1. x", &markup()), format!("{BI}1. x</li>"));
        assert_eq!(list_items("1. - x", &markup()), format!("{NI}- x</li>"));
    }

    #[test]
    fn test_stitch_adjacent() {
        let input = format!("{BI}a</li>\n{BI}b</li>\n\n{BI}c</li>");
        assert_eq!(
            stitch_items(&input, &markup()),
            format!("{BI}a</li>{BI}b</li>\n\n{BI}c</li>")
        );
    }

    #[test]
    fn test_stitch_ignores_other_tags() {
        let input = format!("{BI}a</li>\n<link>");
        assert_eq!(stitch_items(&input, &markup()), input);
    }

    #[test]
    fn test_group_single_run() {
        assert_eq!(
            all("- one\n- two\n- three"),
            format!("{UL}{BI}one</li>{BI}two</li>{BI}three</li></ul>")
        );
    }

    #[test]
    fn test_group_ordered() {
        assert_eq!(
            all("1. first\n2. second"),
            format!("{OL}{NI}first</li>{NI}second</li></ol>")
        );
    }

    #[test]
    fn test_group_disjoint_runs() {
        assert_eq!(
            all("- a\n- b\n\ntext\n\n1. c\n2. d"),
            format!("{UL}{BI}a</li>{BI}b</li></ul>\n\ntext\n\n{OL}{NI}c</li>{NI}d</li></ol>")
        );
    }

    #[test]
    fn test_group_stops_before_heading() {
        let input = format!("{BI}a</li>{BI}b</li>\n<h1>Heading</h1>");
        assert_eq!(
            group_lists(&input, &markup()),
            format!("{UL}{BI}a</li>{BI}b</li></ul>\n<h1>Heading</h1>")
        );
    }

    #[test]
    fn test_mixed_run_follows_first_item() {
        assert_eq!(
            all("- a\n1. b"),
            format!("{UL}{BI}a</li>{NI}b</li></ul>")
        );
    }

    #[test]
    fn test_unclosed_item_passes_through() {
        let input = format!("x {BI}dangling");
        assert_eq!(group_lists(&input, &markup()), input);
    }

    #[test]
    fn test_closed_run_before_unclosed_items() {
        let dangling = BI.repeat(3);
        let input = format!("{BI}a</li>\n{dangling}tail");
        assert_eq!(
            group_lists(&input, &markup()),
            format!("{UL}{BI}a</li></ul>\n{dangling}tail")
        );
    }

    #[test]
    fn test_many_unclosed_items_pass_through() {
        let input = format!("{NI}x ").repeat(2000);
        assert_eq!(group_lists(&input, &markup()), input);
    }

    #[test]
    fn test_no_items() {
        assert_eq!(group_lists("plain\ntext", &markup()), "plain\ntext");
    }
}
