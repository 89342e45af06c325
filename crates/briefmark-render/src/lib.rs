//! Briefmark Render
//!
//! Converts the assistant's markdown subset into HTML through six
//! textual rewrite passes, applied in a fixed order because later
//! passes look for markup injected by earlier ones:
//!
//! 1. [`Pass::Headings`] - `#`, `##`, `###` lines to `h1`..`h3`
//! 2. [`Pass::Bold`] - `**text**` to `strong`
//! 3. [`Pass::ListItems`] - `- text` and `N. text` lines to items
//! 4. [`Pass::StitchItems`] - drop newlines between adjacent items
//! 5. [`Pass::GroupLists`] - wrap each item run in `ul` or `ol`
//! 6. [`Pass::Paragraphs`] - wrap plain lines in `p`, newlines to `<br />`
//!
//! Rendering is total: every string produces some HTML. The output is
//! not escaped; text from the input reaches the markup verbatim.
//!
//! # Example
//!
//! ```
//! use briefmark_render::render;
//!
//! let html = render("# Petition\n- first\n- second");
//! assert!(html.starts_with("<h1"));
//! assert!(html.contains("<ul"));
//! ```

pub mod heading;
pub mod list;
pub mod markup;
pub mod text;

pub use heading::headings;
pub use list::{group_lists, list_items, stitch_items};
pub use markup::{Markup, MarkupClasses, ITEM_CLOSE, LINE_BREAK};
pub use text::{bold, paragraphs};

use std::borrow::Cow;
use std::sync::LazyLock;

use briefmark_core::Element;
use log::trace;

/// One stage of the rewrite pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Headings,
    Bold,
    ListItems,
    StitchItems,
    GroupLists,
    Paragraphs,
}

/// The passes in the order they run.
pub const PASSES: [Pass; 6] = [
    Pass::Headings,
    Pass::Bold,
    Pass::ListItems,
    Pass::StitchItems,
    Pass::GroupLists,
    Pass::Paragraphs,
];

impl Pass {
    /// Run this pass over `input`.
    pub fn apply(&self, input: &str, markup: &Markup) -> String {
        match self {
            Pass::Headings => headings(input, markup),
            Pass::Bold => bold(input, markup),
            Pass::ListItems => list_items(input, markup),
            Pass::StitchItems => stitch_items(input, markup),
            Pass::GroupLists => group_lists(input, markup),
            Pass::Paragraphs => paragraphs(input, markup),
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Headings => write!(f, "headings"),
            Pass::Bold => write!(f, "bold"),
            Pass::ListItems => write!(f, "list-items"),
            Pass::StitchItems => write!(f, "stitch-items"),
            Pass::GroupLists => write!(f, "group-lists"),
            Pass::Paragraphs => write!(f, "paragraphs"),
        }
    }
}

/// Markdown-subset to HTML renderer.
///
/// Holds only its tag table, so one renderer can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    markup: Markup,
}

impl Renderer {
    /// Create a renderer with the default markup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a specific markup.
    pub fn with_markup(markup: Markup) -> Self {
        Self { markup }
    }

    /// The tag table in use.
    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Render a document.
    pub fn render(&self, input: &str) -> String {
        let mut html = normalize_newlines(input).into_owned();
        for pass in PASSES {
            html = pass.apply(&html, &self.markup);
            trace!("{} pass -> {} bytes", pass, html.len());
        }
        html
    }

    /// Render a document and place it in the container element.
    pub fn render_wrapped(&self, input: &str) -> String {
        self.markup.wrap(Element::Container, &self.render(input))
    }

    /// Render a document, keeping the output of every pass.
    ///
    /// The last entry holds the same string [`Renderer::render`] returns.
    pub fn render_traced(&self, input: &str) -> Vec<(Pass, String)> {
        let mut html = normalize_newlines(input).into_owned();
        let mut trace = Vec::with_capacity(PASSES.len());
        for pass in PASSES {
            html = pass.apply(&html, &self.markup);
            trace.push((pass, html.clone()));
        }
        trace
    }
}

/// Renderer with the default markup, built on first use.
static DEFAULT_RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::new);

/// Render a document with the default markup.
pub fn render(input: &str) -> String {
    DEFAULT_RENDERER.render(input)
}

/// Turn CRLF line endings into LF so every pass sees bare `\n`.
fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if input.contains("\r\n") {
        Cow::Owned(input.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(input)
    }
}
