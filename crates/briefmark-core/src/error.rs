//! Error types for briefmark

use thiserror::Error;

use crate::enums::Element;

/// Main error type for briefmark operations
#[derive(Error, Debug)]
pub enum BriefmarkError {
    /// IO error while reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured markup cannot be used for rendering
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

/// Problems with a tag table built from user configuration.
///
/// Rendering itself never fails; these only surface when a
/// markup is assembled from classes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Both list item kinds would open with the same tag, so runs
    /// of items could not be told apart when grouping.
    #[error("bullet and numbered list items share the opening tag {0}")]
    AmbiguousItemTags(String),

    /// A class value that would break out of its attribute
    #[error("invalid class for {element}: {value:?}")]
    InvalidClass {
        /// Element the class was configured for
        element: Element,
        /// The rejected value
        value: String,
    },
}

/// Result type alias for briefmark operations
pub type Result<T> = std::result::Result<T, BriefmarkError>;
