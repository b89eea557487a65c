//! The complete theme and its partial override form

use indexmap::IndexMap;
use serde::Deserialize;

use crate::builtin;
use crate::error::ThemeError;
use crate::palette::{ColorScale, Palette, SHADE_COUNT};
use crate::scale::{
    Headings, HeadingsOverride, SizeScale, SizeScaleOverride, ZIndexOverride, ZIndexScale,
};

/// The complete design-token set the compiler reads.
///
/// Always constructed either as the built-in default or by merging a
/// [`ThemeOverride`] over it; every key is present by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub colors: Palette,
    /// Palette entry aliased as `primary`.
    pub primary_color: String,
    /// Shade index used as the solid-fill representative of every scale.
    pub primary_shade: u8,
    /// Radius key the `radius-default` variable points at.
    pub default_radius: String,
    pub font_family: String,
    pub font_family_monospace: String,
    pub font_family_headings: String,
    pub breakpoints: SizeScale,
    pub font_sizes: SizeScale,
    pub line_heights: SizeScale,
    pub headings: Headings,
    pub spacing: SizeScale,
    pub shadows: SizeScale,
    pub radii: SizeScale,
    pub z_index: ZIndexScale,
}

impl Default for Theme {
    fn default() -> Self {
        builtin::default_theme()
    }
}

/// A partial theme parsed from a user file.
///
/// Field aliases accept the camelCase spellings used by theme files exported
/// from JavaScript tooling.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeOverride {
    pub colors: Option<IndexMap<String, ColorScale>>,
    #[serde(alias = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(alias = "primaryShade")]
    pub primary_shade: Option<u8>,
    #[serde(alias = "defaultRadius")]
    pub default_radius: Option<String>,
    #[serde(alias = "fontFamily")]
    pub font_family: Option<String>,
    #[serde(alias = "fontFamilyMonospace")]
    pub font_family_monospace: Option<String>,
    #[serde(alias = "fontFamilyHeadings")]
    pub font_family_headings: Option<String>,
    pub breakpoints: Option<SizeScaleOverride>,
    #[serde(alias = "fontSizes")]
    pub font_sizes: Option<SizeScaleOverride>,
    #[serde(alias = "lineHeights")]
    pub line_heights: Option<SizeScaleOverride>,
    pub headings: Option<HeadingsOverride>,
    pub spacing: Option<SizeScaleOverride>,
    pub shadows: Option<SizeScaleOverride>,
    pub radii: Option<SizeScaleOverride>,
    #[serde(alias = "zIndex")]
    pub z_index: Option<ZIndexOverride>,
}

impl ThemeOverride {
    /// Field names that mark a parsed document as a theme, both spellings.
    /// Used when probing wrapper shapes in theme files.
    pub const FIELDS: &'static [&'static str] = &[
        "colors",
        "primary_color",
        "primaryColor",
        "primary_shade",
        "primaryShade",
        "default_radius",
        "defaultRadius",
        "font_family",
        "fontFamily",
        "font_family_monospace",
        "fontFamilyMonospace",
        "font_family_headings",
        "fontFamilyHeadings",
        "breakpoints",
        "font_sizes",
        "fontSizes",
        "line_heights",
        "lineHeights",
        "headings",
        "spacing",
        "shadows",
        "radii",
        "z_index",
        "zIndex",
    ];
}

impl Theme {
    /// Overlay `overrides` onto `defaults`. Colors merge per name: known
    /// names replace their default scale, new names append, everything else
    /// keeps its default.
    pub fn merge(defaults: Theme, overrides: &ThemeOverride) -> Theme {
        let mut colors = defaults.colors;
        if let Some(over) = &overrides.colors {
            for (name, scale) in over {
                colors.insert(name.clone(), scale.clone());
            }
        }

        let scale = |base: &SizeScale, over: &Option<SizeScaleOverride>| match over {
            Some(o) => base.merged(o),
            None => base.clone(),
        };

        Theme {
            colors,
            primary_color: overrides
                .primary_color
                .clone()
                .unwrap_or(defaults.primary_color),
            primary_shade: overrides.primary_shade.unwrap_or(defaults.primary_shade),
            default_radius: overrides
                .default_radius
                .clone()
                .unwrap_or(defaults.default_radius),
            font_family: overrides.font_family.clone().unwrap_or(defaults.font_family),
            font_family_monospace: overrides
                .font_family_monospace
                .clone()
                .unwrap_or(defaults.font_family_monospace),
            font_family_headings: overrides
                .font_family_headings
                .clone()
                .unwrap_or(defaults.font_family_headings),
            breakpoints: scale(&defaults.breakpoints, &overrides.breakpoints),
            font_sizes: scale(&defaults.font_sizes, &overrides.font_sizes),
            line_heights: scale(&defaults.line_heights, &overrides.line_heights),
            headings: match &overrides.headings {
                Some(o) => defaults.headings.merged(o),
                None => defaults.headings,
            },
            spacing: scale(&defaults.spacing, &overrides.spacing),
            shadows: scale(&defaults.shadows, &overrides.shadows),
            radii: scale(&defaults.radii, &overrides.radii),
            z_index: match &overrides.z_index {
                Some(o) => defaults.z_index.merged(o),
                None => defaults.z_index,
            },
        }
    }

    /// Merge over the built-in defaults and validate. The single entry point
    /// the compiler and emitter share.
    pub fn merged(overrides: Option<&ThemeOverride>) -> Result<Theme, ThemeError> {
        let theme = match overrides {
            Some(over) => Theme::merge(Theme::default(), over),
            None => Theme::default(),
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Reject shapes the compiler cannot expand deterministically.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (name, scale) in &self.colors {
            if scale.len() != SHADE_COUNT {
                return Err(ThemeError::InvalidColorScale {
                    name: name.clone(),
                    len: scale.len(),
                });
            }
        }
        if !self.colors.contains_key(&self.primary_color) {
            return Err(ThemeError::UnknownPrimaryColor(self.primary_color.clone()));
        }
        if usize::from(self.primary_shade) >= SHADE_COUNT {
            return Err(ThemeError::InvalidPrimaryShade(self.primary_shade));
        }
        if self.radii.get(&self.default_radius).is_none() {
            return Err(ThemeError::UnknownRadiusKey(self.default_radius.clone()));
        }
        tracing::trace!(
            colors = self.colors.len(),
            primary = %self.primary_color,
            "theme validated"
        );
        Ok(())
    }

    /// Shade scale of the designated primary color.
    ///
    /// Only callable on a validated theme.
    pub fn primary_scale(&self) -> &ColorScale {
        &self.colors[&self.primary_color]
    }
}
