//! `--tailor-*` variable names and reference formatting
//!
//! Every custom-property name used anywhere in the crate is built here, so
//! the compiler's references and the emitter's declarations cannot drift.

/// Prefix of every emitted custom property.
pub const VAR_PREFIX: &str = "--tailor";

/// `--tailor-color-{name}-{shade}`
pub fn color_var(name: &str, shade: usize) -> String {
    format!("{VAR_PREFIX}-color-{name}-{shade}")
}

/// `--tailor-color-{name}-{variant}`
pub fn color_variant_var(name: &str, variant: &str) -> String {
    format!("{VAR_PREFIX}-color-{name}-{variant}")
}

/// `--tailor-primary-color-{shade}`
pub fn primary_var(shade: usize) -> String {
    format!("{VAR_PREFIX}-primary-color-{shade}")
}

/// `--tailor-primary-color-{variant}`
pub fn primary_variant_var(variant: &str) -> String {
    format!("{VAR_PREFIX}-primary-color-{variant}")
}

/// `--tailor-color-{semantic}` for the fixed semantic names.
pub fn semantic_var(name: &str) -> String {
    format!("{VAR_PREFIX}-color-{name}")
}

/// `--tailor-{section}-{key}`, e.g. `--tailor-font-size-md`.
pub fn scale_var(section: &str, key: &str) -> String {
    format!("{VAR_PREFIX}-{section}-{key}")
}

/// `--tailor-{level}-{part}`, e.g. `--tailor-h1-font-size`.
pub fn heading_var(level: &str, part: &str) -> String {
    format!("{VAR_PREFIX}-{level}-{part}")
}

/// Unsuffixed root token, e.g. `--tailor-font-family`.
pub fn root_var(name: &str) -> String {
    format!("{VAR_PREFIX}-{name}")
}

/// Plain `var()` wrapper for non-color tokens.
pub fn var_ref(var_name: &str) -> String {
    format!("var({var_name})")
}

/// How color references are rendered in the preset.
///
/// Both strategies flow through every category identically; the choice only
/// changes the wrapper around the variable reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// Bare `var()` reference.
    Var,
    /// Relative color syntax, so the utility framework can inject an alpha
    /// channel into the resolved value.
    #[default]
    RgbAlpha,
}

impl ColorFormat {
    /// Render a color reference to `var_name` under this strategy.
    pub fn reference(self, var_name: &str) -> String {
        match self {
            Self::Var => format!("var({var_name})"),
            Self::RgbAlpha => format!("rgb(from var({var_name}) r g b / <alpha-value>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variable_names() {
        assert_eq!(color_var("blue", 6), "--tailor-color-blue-6");
        assert_eq!(color_variant_var("blue", "filled"), "--tailor-color-blue-filled");
        assert_eq!(primary_var(0), "--tailor-primary-color-0");
        assert_eq!(primary_variant_var("outline-hover"), "--tailor-primary-color-outline-hover");
        assert_eq!(semantic_var("default-border"), "--tailor-color-default-border");
        assert_eq!(scale_var("font-size", "md"), "--tailor-font-size-md");
        assert_eq!(heading_var("h3", "line-height"), "--tailor-h3-line-height");
    }

    #[test]
    fn reference_strategies() {
        let name = "--tailor-color-blue-6";
        assert_eq!(ColorFormat::Var.reference(name), "var(--tailor-color-blue-6)");
        assert_eq!(
            ColorFormat::RgbAlpha.reference(name),
            "rgb(from var(--tailor-color-blue-6) r g b / <alpha-value>)"
        );
    }
}
