//! Enums for the constructs of the markdown subset.
//!
//! Only three heading levels and two list kinds exist; everything
//! else in the input is plain paragraph text.

use serde::{Deserialize, Serialize};

/// A recognised heading level (`#`, `##`, `###`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Number of `#` characters in the marker.
    pub fn depth(&self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Level for a marker of `depth` hashes, if it is a supported one.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// The element this level renders to.
    pub fn element(&self) -> Element {
        match self {
            HeadingLevel::H1 => Element::H1,
            HeadingLevel::H2 => Element::H2,
            HeadingLevel::H3 => Element::H3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "h{}", self.depth())
    }
}

/// Represents the kind of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Hyphen items (`- text`)
    Bullet,
    /// Numeral items (`1. text`)
    Numbered,
}

impl ListKind {
    /// The enclosing list element (`ul` or `ol`).
    pub fn list_element(&self) -> Element {
        match self {
            ListKind::Bullet => Element::UnorderedList,
            ListKind::Numbered => Element::OrderedList,
        }
    }

    /// The item element (`li` carrying this kind's class).
    pub fn item_element(&self) -> Element {
        match self {
            ListKind::Bullet => Element::BulletItem,
            ListKind::Numbered => Element::NumberedItem,
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Numbered => write!(f, "numbered"),
        }
    }
}

/// Every element the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    H1,
    H2,
    H3,
    Strong,
    UnorderedList,
    OrderedList,
    BulletItem,
    NumberedItem,
    Paragraph,
    /// Optional `div` around a whole document
    Container,
}

impl Element {
    /// HTML tag name.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Element::H1 => "h1",
            Element::H2 => "h2",
            Element::H3 => "h3",
            Element::Strong => "strong",
            Element::UnorderedList => "ul",
            Element::OrderedList => "ol",
            Element::BulletItem | Element::NumberedItem => "li",
            Element::Paragraph => "p",
            Element::Container => "div",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::BulletItem => write!(f, "li (bullet)"),
            Element::NumberedItem => write!(f, "li (numbered)"),
            other => write!(f, "{}", other.tag_name()),
        }
    }
}
