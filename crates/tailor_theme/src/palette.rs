//! Palette colors: named, ordered shade scales

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of shades in every color scale, index 0 lightest, 9 darkest.
pub const SHADE_COUNT: usize = 10;

/// Named color scales, in declaration order.
///
/// Iteration order is what makes repeated runs byte-identical, hence the
/// ordered map.
pub type Palette = IndexMap<String, ColorScale>;

/// The ordered shade values of one named color.
///
/// Deserialization accepts any length so a wrong-sized scale surfaces as a
/// [`crate::ThemeError::InvalidColorScale`] naming the color, not as an
/// opaque serde message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(Vec<String>);

impl ColorScale {
    pub fn new(shades: Vec<String>) -> Self {
        Self(shades)
    }

    pub fn shades(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shade at `index`, panicking past the end; call sites run after
    /// validation has pinned the length to [`SHADE_COUNT`].
    pub fn shade(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl<S: Into<String>> From<[S; SHADE_COUNT]> for ColorScale {
    fn from(shades: [S; SHADE_COUNT]) -> Self {
        Self(shades.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_array_keeps_order() {
        let scale = ColorScale::from(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        assert_eq!(scale.len(), SHADE_COUNT);
        assert_eq!(scale.shade(0), "a");
        assert_eq!(scale.shade(9), "j");
    }

    #[test]
    fn deserializes_any_length() {
        let scale: ColorScale = serde_json::from_str(r##"["#fff", "#000"]"##).unwrap();
        assert_eq!(scale.len(), 2);
    }
}
