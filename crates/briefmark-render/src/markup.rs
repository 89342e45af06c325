//! Tag table used by the rewrite passes.
//!
//! A [`Markup`] is built once from [`MarkupClasses`] and holds the
//! finished opening tags, so the passes only concatenate strings.
//! The two list item kinds must open with different tags: the
//! grouping pass reads a run's kind back from its first item.

use briefmark_config::MarkupConfig;
use briefmark_core::{Element, HeadingLevel, ListKind, MarkupError};
use regex::Regex;

/// Closing tag shared by both item kinds.
pub const ITEM_CLOSE: &str = "</li>";

/// Line-break marker emitted for every remaining newline.
pub const LINE_BREAK: &str = "<br />";

/// Class attribute values per element. `None` means no attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupClasses {
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
    pub strong: Option<String>,
    /// Shared by `ul` and `ol`
    pub list: Option<String>,
    pub bullet: Option<String>,
    pub numbered: Option<String>,
    pub paragraph: Option<String>,
    pub container: Option<String>,
}

impl Default for MarkupClasses {
    fn default() -> Self {
        Self {
            h1: Some("text-2xl font-bold my-4".to_string()),
            h2: Some("text-xl font-bold my-3".to_string()),
            h3: Some("text-lg font-bold my-2".to_string()),
            strong: None,
            list: Some("my-2 space-y-1".to_string()),
            bullet: Some("ml-6 list-disc".to_string()),
            numbered: Some("ml-6 list-decimal".to_string()),
            paragraph: Some("my-2".to_string()),
            container: Some("markdown-content".to_string()),
        }
    }
}

impl MarkupClasses {
    /// Apply the keys set in a config on top of the defaults.
    ///
    /// Empty strings clear the class.
    pub fn from_config(config: &MarkupConfig) -> Self {
        let mut classes = Self::default();
        apply(&mut classes.h1, &config.h1);
        apply(&mut classes.h2, &config.h2);
        apply(&mut classes.h3, &config.h3);
        apply(&mut classes.strong, &config.strong);
        apply(&mut classes.list, &config.list);
        apply(&mut classes.bullet, &config.bullet);
        apply(&mut classes.numbered, &config.numbered);
        apply(&mut classes.paragraph, &config.paragraph);
        apply(&mut classes.container, &config.container);
        classes
    }

    /// Drop every class except the two item classes.
    pub fn bare(self) -> Self {
        Self {
            h1: None,
            h2: None,
            h3: None,
            strong: None,
            list: None,
            paragraph: None,
            container: None,
            ..self
        }
    }

    fn get(&self, element: Element) -> Option<&str> {
        let class = match element {
            Element::H1 => &self.h1,
            Element::H2 => &self.h2,
            Element::H3 => &self.h3,
            Element::Strong => &self.strong,
            Element::UnorderedList | Element::OrderedList => &self.list,
            Element::BulletItem => &self.bullet,
            Element::NumberedItem => &self.numbered,
            Element::Paragraph => &self.paragraph,
            Element::Container => &self.container,
        };
        class.as_deref()
    }
}

fn apply(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        *target = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

/// Finished opening tags for every element.
#[derive(Debug, Clone)]
pub struct Markup {
    classes: MarkupClasses,
    h1: String,
    h2: String,
    h3: String,
    strong: String,
    ul: String,
    ol: String,
    bullet: String,
    numbered: String,
    paragraph: String,
    container: String,
    /// Matches either item opening tag
    items: Regex,
}

impl Default for Markup {
    fn default() -> Self {
        Self::new(MarkupClasses::default()).expect("Default markup should be valid")
    }
}

impl Markup {
    /// Build the tag table, validating the classes.
    pub fn new(classes: MarkupClasses) -> Result<Self, MarkupError> {
        let open = |element: Element| -> Result<String, MarkupError> {
            match classes.get(element) {
                None => Ok(format!("<{}>", element.tag_name())),
                Some(class) if class.contains(['"', '<', '>']) => Err(MarkupError::InvalidClass {
                    element,
                    value: class.to_string(),
                }),
                Some(class) => Ok(format!("<{} class=\"{}\">", element.tag_name(), class)),
            }
        };

        let bullet = open(Element::BulletItem)?;
        let numbered = open(Element::NumberedItem)?;
        if bullet == numbered {
            return Err(MarkupError::AmbiguousItemTags(bullet));
        }

        let items = Regex::new(&format!(
            "{}|{}",
            regex::escape(&bullet),
            regex::escape(&numbered)
        ))
        .expect("Escaped tags should form a valid pattern");

        Ok(Self {
            h1: open(Element::H1)?,
            h2: open(Element::H2)?,
            h3: open(Element::H3)?,
            strong: open(Element::Strong)?,
            ul: open(Element::UnorderedList)?,
            ol: open(Element::OrderedList)?,
            paragraph: open(Element::Paragraph)?,
            container: open(Element::Container)?,
            bullet,
            numbered,
            items,
            classes,
        })
    }

    /// Build from configuration.
    pub fn from_config(config: &MarkupConfig) -> Result<Self, MarkupError> {
        Self::new(MarkupClasses::from_config(config))
    }

    /// The classes this markup was built from.
    pub fn classes(&self) -> &MarkupClasses {
        &self.classes
    }

    /// Opening tag of `element`.
    pub fn open(&self, element: Element) -> &str {
        match element {
            Element::H1 => &self.h1,
            Element::H2 => &self.h2,
            Element::H3 => &self.h3,
            Element::Strong => &self.strong,
            Element::UnorderedList => &self.ul,
            Element::OrderedList => &self.ol,
            Element::BulletItem => &self.bullet,
            Element::NumberedItem => &self.numbered,
            Element::Paragraph => &self.paragraph,
            Element::Container => &self.container,
        }
    }

    /// Wrap `content` in `element`.
    pub fn wrap(&self, element: Element, content: &str) -> String {
        let open = self.open(element);
        let name = element.tag_name();
        let mut out = String::with_capacity(open.len() + content.len() + name.len() + 3);
        out.push_str(open);
        out.push_str(content);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        out
    }

    /// Wrap heading text.
    pub fn heading(&self, level: HeadingLevel, content: &str) -> String {
        self.wrap(level.element(), content)
    }

    /// Kind of the item whose opening tag starts `s`, if any.
    pub fn item_at(&self, s: &str) -> Option<ListKind> {
        if s.starts_with(&self.bullet) {
            Some(ListKind::Bullet)
        } else if s.starts_with(&self.numbered) {
            Some(ListKind::Numbered)
        } else {
            None
        }
    }

    /// Byte offset and kind of the first item opening tag in `s`.
    pub fn find_item(&self, s: &str) -> Option<(usize, ListKind)> {
        let m = self.items.find(s)?;
        self.item_at(&s[m.start()..]).map(|kind| (m.start(), kind))
    }
}
