//! Markup configuration.
//!
//! Holds the class attribute configured for each element. An empty
//! string means the element is emitted without a class attribute;
//! an unset key keeps whatever the base configuration had.

use serde::{Deserialize, Serialize};

/// Class attributes per element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkupConfig {
    /// Level-1 heading class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,

    /// Level-2 heading class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2: Option<String>,

    /// Level-3 heading class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3: Option<String>,

    /// Bold span class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<String>,

    /// Class shared by the enclosing `ul` and `ol` elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,

    /// Class of items written with a hyphen marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,

    /// Class of items written with a numeral marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbered: Option<String>,

    /// Paragraph class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,

    /// Class of the `div` a wrapped document is placed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl MarkupConfig {
    /// Merge another MarkupConfig into this one.
    pub fn merge(&mut self, other: &MarkupConfig) {
        merge_field(&mut self.h1, &other.h1);
        merge_field(&mut self.h2, &other.h2);
        merge_field(&mut self.h3, &other.h3);
        merge_field(&mut self.strong, &other.strong);
        merge_field(&mut self.list, &other.list);
        merge_field(&mut self.bullet, &other.bullet);
        merge_field(&mut self.numbered, &other.numbered);
        merge_field(&mut self.paragraph, &other.paragraph);
        merge_field(&mut self.container, &other.container);
    }
}

fn merge_field(target: &mut Option<String>, other: &Option<String>) {
    if let Some(value) = other {
        *target = Some(value.clone());
    }
}
