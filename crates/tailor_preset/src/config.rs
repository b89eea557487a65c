//! Theme-to-config compiler
//!
//! Assembles the build-time configuration fragment a utility-class
//! generator consumes. Scale sections reference the emitted custom
//! properties; only `screens` carries literal values, media queries cannot
//! read custom properties.

use indexmap::IndexMap;
use serde::Serialize;
use tailor_theme::{Theme, ThemeError, ThemeOverride};

use crate::categories::{color_category, ColorEntry, BACKGROUND_TABLE, BORDER_TABLE, TEXT_TABLE};
use crate::names::DARK_SCHEME_SELECTOR;
use crate::vars::{heading_var, root_var, scale_var, var_ref, ColorFormat};

/// The configuration fragment, shaped for direct serialization into the
/// consumer's expected field names.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Which source files are scanned for class usage is a build-tool
    /// concern; the fragment ships an empty rule.
    pub content: Vec<String>,
    pub dark_mode: (String, String),
    pub theme: ThemeSection,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeSection {
    pub extend: Extend,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extend {
    pub screens: IndexMap<String, String>,
    pub font_family: IndexMap<String, Vec<String>>,
    pub font_size: IndexMap<String, String>,
    pub font_weight: IndexMap<String, String>,
    pub line_height: IndexMap<String, String>,
    pub spacing: IndexMap<String, String>,
    pub box_shadow: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
    pub colors: IndexMap<String, ColorEntry>,
    pub background_color: IndexMap<String, ColorEntry>,
    pub placeholder_color: IndexMap<String, ColorEntry>,
    pub ring_color: IndexMap<String, ColorEntry>,
    pub divide_color: IndexMap<String, ColorEntry>,
    pub border_color: IndexMap<String, ColorEntry>,
    pub z_index: IndexMap<String, String>,
}

impl Preset {
    /// Merge `overrides` over the built-in defaults, validate, compile.
    /// Omitting the overrides compiles the defaults as-is.
    pub fn generate(overrides: Option<&ThemeOverride>) -> Result<Self, ThemeError> {
        Self::generate_with(overrides, ColorFormat::default())
    }

    pub fn generate_with(
        overrides: Option<&ThemeOverride>,
        format: ColorFormat,
    ) -> Result<Self, ThemeError> {
        let theme = Theme::merged(overrides)?;
        Ok(Self::from_theme(&theme, format))
    }

    /// Compile an already-merged, validated theme.
    pub fn from_theme(theme: &Theme, format: ColorFormat) -> Self {
        tracing::debug!(colors = theme.colors.len(), ?format, "compiling preset");

        let border = color_category(&theme.colors, BORDER_TABLE, format);

        Preset {
            content: Vec::new(),
            dark_mode: ("selector".to_string(), DARK_SCHEME_SELECTOR.to_string()),
            theme: ThemeSection {
                extend: Extend {
                    screens: screens(theme),
                    font_family: font_family(),
                    font_size: font_size(theme),
                    font_weight: font_weight(theme),
                    line_height: line_height(theme),
                    spacing: sized_scale("spacing", Some("md")),
                    box_shadow: sized_scale("shadow", Some("xs")),
                    border_radius: border_radius(),
                    colors: color_category(&theme.colors, TEXT_TABLE, format),
                    background_color: color_category(&theme.colors, BACKGROUND_TABLE, format),
                    placeholder_color: color_category(&theme.colors, TEXT_TABLE, format),
                    ring_color: border.clone(),
                    divide_color: border.clone(),
                    border_color: border,
                    z_index: z_index(),
                },
            },
        }
    }
}

fn screens(theme: &Theme) -> IndexMap<String, String> {
    theme
        .breakpoints
        .entries()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn font_family() -> IndexMap<String, Vec<String>> {
    let mut out = IndexMap::new();
    out.insert("DEFAULT".to_string(), vec![var_ref(&root_var("font-family"))]);
    out.insert("sans".to_string(), vec![var_ref(&root_var("font-family"))]);
    out.insert("mono".to_string(), vec![var_ref(&root_var("font-family-monospace"))]);
    out.insert("headings".to_string(), vec![var_ref(&root_var("font-family-headings"))]);
    out
}

fn font_size(theme: &Theme) -> IndexMap<String, String> {
    let mut out = sized_scale("font-size", None);
    for (level, _) in theme.headings.levels() {
        out.insert(level.to_string(), var_ref(&heading_var(level, "font-size")));
    }
    out.insert("DEFAULT".to_string(), var_ref(&scale_var("font-size", "md")));
    out
}

fn font_weight(theme: &Theme) -> IndexMap<String, String> {
    theme
        .headings
        .levels()
        .into_iter()
        .map(|(level, _)| (level.to_string(), var_ref(&heading_var(level, "font-weight"))))
        .collect()
}

fn line_height(theme: &Theme) -> IndexMap<String, String> {
    let mut out = sized_scale("line-height", None);
    for (level, _) in theme.headings.levels() {
        out.insert(level.to_string(), var_ref(&heading_var(level, "line-height")));
    }
    out.insert("heading".to_string(), var_ref(&root_var("heading-line-height")));
    out.insert("DEFAULT".to_string(), var_ref(&root_var("line-height")));
    out
}

fn border_radius() -> IndexMap<String, String> {
    let mut out = sized_scale("radius", None);
    out.insert("DEFAULT".to_string(), var_ref(&scale_var("radius", "default")));
    out
}

fn z_index() -> IndexMap<String, String> {
    crate::names::Z_INDEX_KEYS
        .into_iter()
        .map(|key| (key.to_string(), var_ref(&scale_var("z-index", key))))
        .collect()
}

/// xs..xl references into one variable section, plus an optional `DEFAULT`
/// alias to the designated key.
fn sized_scale(section: &str, default_key: Option<&str>) -> IndexMap<String, String> {
    let mut out: IndexMap<String, String> = crate::names::SIZE_KEYS
        .into_iter()
        .map(|key| (key.to_string(), var_ref(&scale_var(section, key))))
        .collect();
    if let Some(key) = default_key {
        out.insert("DEFAULT".to_string(), var_ref(&scale_var(section, key)));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scale_sections_reference_variables_not_values() {
        let preset = Preset::generate(None).unwrap();
        let extend = &preset.theme.extend;
        assert_eq!(extend.font_size["xs"], "var(--tailor-font-size-xs)");
        assert_eq!(extend.spacing["DEFAULT"], "var(--tailor-spacing-md)");
        assert_eq!(extend.box_shadow["DEFAULT"], "var(--tailor-shadow-xs)");
        assert_eq!(extend.border_radius["DEFAULT"], "var(--tailor-radius-default)");
        assert_eq!(extend.line_height["heading"], "var(--tailor-heading-line-height)");
        assert_eq!(extend.font_weight["h1"], "var(--tailor-h1-font-weight)");
        assert_eq!(extend.z_index["max"], "var(--tailor-z-index-max)");
    }

    #[test]
    fn screens_carry_literal_breakpoints() {
        let preset = Preset::generate(None).unwrap();
        assert_eq!(preset.theme.extend.screens["md"], "62em");
        assert!(!preset.theme.extend.screens.contains_key("DEFAULT"));
    }

    #[test]
    fn font_weight_has_no_default_alias() {
        let preset = Preset::generate(None).unwrap();
        assert!(!preset.theme.extend.font_weight.contains_key("DEFAULT"));
    }

    #[test]
    fn heading_sections_cover_the_registry_keys() {
        let preset = Preset::generate(None).unwrap();
        let weights: Vec<&str> = preset.theme.extend.font_weight.keys().map(String::as_str).collect();
        assert_eq!(weights, crate::names::HEADING_KEYS);
    }

    #[test]
    fn ring_divide_border_are_identical() {
        let preset = Preset::generate(None).unwrap();
        let extend = &preset.theme.extend;
        assert_eq!(extend.ring_color, extend.border_color);
        assert_eq!(extend.divide_color, extend.border_color);
    }

    #[test]
    fn serialized_field_names_match_the_consumer() {
        let preset = Preset::generate(None).unwrap();
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["darkMode"][0], "selector");
        assert_eq!(json["darkMode"][1], r#"[data-tailor-color-scheme="dark"]"#);
        assert!(json["theme"]["extend"]["backgroundColor"].is_object());
        assert!(json["theme"]["extend"]["boxShadow"]["DEFAULT"].is_string());
        assert_eq!(json["content"].as_array().map(Vec::len), Some(0));
    }
}
