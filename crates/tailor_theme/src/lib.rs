//! Tailor theme data model
//!
//! A theme is the structured design-token input of the Tailor compiler:
//! named color scales, breakpoints, a typography scale, spacing, shadows,
//! radii and z-index layers.
//!
//! # Overview
//!
//! - [`Theme`]: the complete token set. [`Theme::default`] returns the
//!   built-in theme as a plain value; there is no global theme state.
//! - [`ThemeOverride`]: a partial theme parsed from a user file. Overlaying
//!   it onto the defaults with [`Theme::merged`] always yields a complete
//!   theme, so downstream lookups never miss a key.
//! - [`ColorScale`]: exactly ten ordered shades per color, index 0 lightest,
//!   index 9 darkest. Anything else fails validation with a [`ThemeError`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tailor_theme::{Theme, ThemeOverride};
//!
//! let overrides: ThemeOverride = toml::from_str(user_file)?;
//! let theme = Theme::merged(Some(&overrides))?;
//! assert_eq!(theme.colors.len() >= 14, true);
//! ```

pub mod builtin;
pub mod color;
pub mod error;
pub mod palette;
pub mod scale;
pub mod theme;

pub use color::Rgb;
pub use error::ThemeError;
pub use palette::{ColorScale, Palette, SHADE_COUNT};
pub use scale::{
    Heading, HeadingOverride, Headings, HeadingsOverride, SizeScale, SizeScaleOverride,
    ZIndexOverride, ZIndexScale,
};
pub use theme::{Theme, ThemeOverride};
