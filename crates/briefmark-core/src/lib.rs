//! Briefmark Core
//!
//! This crate provides the shared types and error definitions
//! for the briefmark markdown-subset renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`HeadingLevel`], [`ListKind`], [`Element`] - The constructs of the markdown subset
//! - [`BriefmarkError`], [`MarkupError`] - Error types

pub mod enums;
pub mod error;

pub use enums::{Element, HeadingLevel, ListKind};
pub use error::{BriefmarkError, MarkupError, Result};
