//! CSS custom-property emitter
//!
//! Emits the runtime stylesheet every preset reference resolves against:
//! one declaration per token under `:root`, plus a dark-scheme block that
//! re-points the semantic colors.

use tailor_theme::{ColorScale, Rgb, Theme, ThemeError, ThemeOverride, SHADE_COUNT};

use crate::names::{DARK_SCHEME_SELECTOR, VARIANT_SUFFIXES};
use crate::vars::{
    color_var, color_variant_var, heading_var, primary_var, primary_variant_var, root_var,
    scale_var, semantic_var, var_ref,
};

/// Alphas of the translucent interaction-state variants.
const LIGHT_ALPHA: f32 = 0.1;
const LIGHT_HOVER_ALPHA: f32 = 0.12;
const OUTLINE_HOVER_ALPHA: f32 = 0.05;

/// Merge `overrides` over the built-in defaults, validate, emit.
pub fn stylesheet(overrides: Option<&ThemeOverride>) -> Result<String, ThemeError> {
    let theme = Theme::merged(overrides)?;
    Ok(stylesheet_for(&theme))
}

/// Emit the stylesheet of an already-merged, validated theme.
pub fn stylesheet_for(theme: &Theme) -> String {
    tracing::debug!(colors = theme.colors.len(), "emitting stylesheet");

    let mut css = String::with_capacity(16 * 1024);
    css.push_str(":root {\n");

    for (key, value) in theme.breakpoints.entries() {
        decl(&mut css, &scale_var("breakpoint", key), value);
    }

    decl(&mut css, &root_var("font-family"), &theme.font_family);
    decl(&mut css, &root_var("font-family-monospace"), &theme.font_family_monospace);
    decl(&mut css, &root_var("font-family-headings"), &theme.font_family_headings);

    for (key, value) in theme.font_sizes.entries() {
        decl(&mut css, &scale_var("font-size", key), value);
    }
    for (key, value) in theme.line_heights.entries() {
        decl(&mut css, &scale_var("line-height", key), value);
    }
    decl(&mut css, &root_var("line-height"), &theme.line_heights.md);

    decl(&mut css, &root_var("heading-font-weight"), &theme.headings.font_weight);
    decl(&mut css, &root_var("heading-line-height"), &theme.headings.line_height);
    for (level, heading) in theme.headings.levels() {
        decl(&mut css, &heading_var(level, "font-size"), &heading.font_size);
        decl(&mut css, &heading_var(level, "line-height"), &heading.line_height);
        decl(&mut css, &heading_var(level, "font-weight"), theme.headings.weight_of(heading));
    }

    for (key, value) in theme.spacing.entries() {
        decl(&mut css, &scale_var("spacing", key), value);
    }
    for (key, value) in theme.shadows.entries() {
        decl(&mut css, &scale_var("shadow", key), value);
    }
    for (key, value) in theme.radii.entries() {
        decl(&mut css, &scale_var("radius", key), value);
    }
    decl(
        &mut css,
        &scale_var("radius", "default"),
        &var_ref(&scale_var("radius", &theme.default_radius)),
    );

    for (key, value) in theme.z_index.entries() {
        decl(&mut css, &scale_var("z-index", key), value);
    }

    let filled = usize::from(theme.primary_shade);
    for (name, scale) in &theme.colors {
        for (shade, value) in scale.shades().iter().enumerate() {
            decl(&mut css, &color_var(name, shade), value);
        }
        color_variants(&mut css, name, scale, filled);
    }

    for shade in 0..SHADE_COUNT {
        decl(
            &mut css,
            &primary_var(shade),
            &var_ref(&color_var(&theme.primary_color, shade)),
        );
    }
    for variant in VARIANT_SUFFIXES {
        decl(
            &mut css,
            &primary_variant_var(variant),
            &var_ref(&color_variant_var(&theme.primary_color, variant)),
        );
    }

    for (name, value) in semantic_light() {
        decl(&mut css, &semantic_var(name), &value);
    }

    css.push_str("}\n");

    css.push_str(&format!("\n{DARK_SCHEME_SELECTOR} {{\n"));
    for (name, value) in semantic_dark() {
        decl(&mut css, &semantic_var(name), &value);
    }
    css.push_str("}\n");

    css
}

/// Static base block placed ahead of the variable block when requested.
/// Only references variables the stylesheet always declares.
pub fn base_styles() -> &'static str {
    "\
*,\n\
*::before,\n\
*::after {\n\
  box-sizing: border-box;\n\
}\n\
\n\
body {\n\
  margin: 0;\n\
  font-family: var(--tailor-font-family);\n\
  font-size: var(--tailor-font-size-md);\n\
  line-height: var(--tailor-line-height);\n\
  background-color: var(--tailor-color-body);\n\
  color: var(--tailor-color-text);\n\
  -webkit-font-smoothing: antialiased;\n\
}\n"
}

fn decl(css: &mut String, name: &str, value: &str) {
    css.push_str("  ");
    css.push_str(name);
    css.push_str(": ");
    css.push_str(value);
    css.push_str(";\n");
}

/// The seven per-color variants, in registry order. Translucent values are
/// derived from the filled shade; a shade that does not parse as hex keeps
/// its opaque reference instead of aborting emission.
fn color_variants(css: &mut String, name: &str, scale: &ColorScale, filled: usize) {
    let hover = (filled + 1).min(SHADE_COUNT - 1);
    let filled_ref = var_ref(&color_var(name, filled));
    let translucent = |alpha: f32| match Rgb::from_hex(scale.shade(filled)) {
        Ok(rgb) => rgb.rgba(alpha),
        Err(_) => filled_ref.clone(),
    };

    decl(css, &color_variant_var(name, "filled"), &filled_ref);
    decl(css, &color_variant_var(name, "filled-hover"), &var_ref(&color_var(name, hover)));
    decl(css, &color_variant_var(name, "light"), &translucent(LIGHT_ALPHA));
    decl(css, &color_variant_var(name, "light-hover"), &translucent(LIGHT_HOVER_ALPHA));
    decl(css, &color_variant_var(name, "light-color"), &filled_ref);
    decl(css, &color_variant_var(name, "outline"), &filled_ref);
    decl(css, &color_variant_var(name, "outline-hover"), &translucent(OUTLINE_HOVER_ALPHA));
}

/// Light-scheme semantic colors. Every entry of the semantic name registry
/// appears here exactly once.
fn semantic_light() -> [(&'static str, String); 14] {
    [
        ("white", "#fff".to_string()),
        ("black", "#000".to_string()),
        ("text", var_ref(&semantic_var("black"))),
        ("body", var_ref(&semantic_var("white"))),
        ("error", var_ref(&color_var("red", 6))),
        ("placeholder", var_ref(&color_var("gray", 5))),
        ("anchor", var_ref(&primary_variant_var("filled"))),
        ("default", var_ref(&semantic_var("white"))),
        ("default-hover", var_ref(&color_var("gray", 0))),
        ("default-color", var_ref(&semantic_var("black"))),
        ("default-border", var_ref(&color_var("gray", 4))),
        ("disabled", var_ref(&color_var("gray", 2))),
        ("disabled-color", var_ref(&color_var("gray", 5))),
        ("disabled-border", var_ref(&color_var("gray", 3))),
    ]
}

/// Dark-scheme overrides; `white` and `black` are scheme-independent.
fn semantic_dark() -> [(&'static str, String); 12] {
    [
        ("text", var_ref(&color_var("dark", 0))),
        ("body", var_ref(&color_var("dark", 7))),
        ("error", var_ref(&color_var("red", 8))),
        ("placeholder", var_ref(&color_var("dark", 3))),
        ("anchor", var_ref(&primary_var(4))),
        ("default", var_ref(&color_var("dark", 6))),
        ("default-hover", var_ref(&color_var("dark", 5))),
        ("default-color", var_ref(&semantic_var("white"))),
        ("default-border", var_ref(&color_var("dark", 4))),
        ("disabled", var_ref(&color_var("dark", 6))),
        ("disabled-color", var_ref(&color_var("dark", 3))),
        ("disabled-border", var_ref(&color_var("dark", 4))),
    ]
}
