// SPDX-License-Identifier: MIT

/// Errors produced while reading color values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The input is not a recognizable hex or CSS color.
    #[error("invalid color format '{input}': {reason}")]
    InvalidColorFormat { input: String, reason: String },

    /// An opacity outside `0.0..=1.0` (or NaN).
    #[error("opacity must be between 0 and 1, got {0}")]
    InvalidOpacity(f64),
}

impl ColorError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
