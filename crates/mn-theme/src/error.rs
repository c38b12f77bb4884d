use mn_color::ColorError;

/// Errors raised while building semantic themes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    /// A role points at a shade the primitive table does not define.
    #[error("primitive scale '{scale}' has no shade {shade}")]
    MissingShade { scale: &'static str, shade: u16 },

    /// A color value could not be built (e.g. an invalid opacity).
    #[error(transparent)]
    Color(#[from] ColorError),
}
