use thiserror::Error;

/// Validation failures for a merged theme.
///
/// The reference behavior for malformed shade data was to emit undefined
/// output; a merged theme is validated up front instead so bad input never
/// reaches the compiler.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("color `{name}` must have exactly 10 shades, got {len}")]
    InvalidColorScale { name: String, len: usize },

    #[error("primary color `{0}` is not in the palette")]
    UnknownPrimaryColor(String),

    #[error("primary shade {0} is out of range (0-9)")]
    InvalidPrimaryShade(u8),

    #[error("default radius `{0}` is not a radius key (xs, sm, md, lg, xl)")]
    UnknownRadiusKey(String),
}
