//! Output options.

use serde::{Deserialize, Serialize};

/// Controls what is written around the rendered markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Place each rendered document inside the container `div`.
    /// Default: false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl OutputConfig {
    /// Whether documents are wrapped in the container element.
    pub fn wrap(&self) -> bool {
        self.wrap.unwrap_or(false)
    }

    /// Merge another OutputConfig into this one.
    pub fn merge(&mut self, other: &OutputConfig) {
        if other.wrap.is_some() {
            self.wrap = other.wrap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_defaults_off() {
        assert!(!OutputConfig::default().wrap());
    }

    #[test]
    fn test_merge() {
        let mut base = OutputConfig { wrap: Some(true) };
        base.merge(&OutputConfig::default());
        assert!(base.wrap());

        base.merge(&OutputConfig { wrap: Some(false) });
        assert!(!base.wrap());
    }
}
