//! Canonical design-token names
//!
//! Pure data shared by the config compiler and the CSS emitter. Both sides
//! reading the same tables is what keeps every generated reference
//! resolvable against an emitted declaration.

/// Ramp step keys paired with the shade index each step reads.
pub const RAMP_STEPS: [(&str, usize); 10] = [
    ("50", 0),
    ("100", 1),
    ("200", 2),
    ("300", 3),
    ("400", 4),
    ("500", 5),
    ("600", 6),
    ("700", 7),
    ("800", 8),
    ("900", 9),
];

/// Interaction-state variant suffixes, one generated alias per entry.
pub const VARIANT_SUFFIXES: [&str; 7] = [
    "filled",
    "filled-hover",
    "light",
    "light-hover",
    "light-color",
    "outline",
    "outline-hover",
];

/// Size keys shared by breakpoints, the type scale, spacing, shadows and
/// radii.
pub const SIZE_KEYS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// Heading levels of the typography scale.
pub const HEADING_KEYS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Stacking layers, lowest to highest.
pub const Z_INDEX_KEYS: [&str; 5] = ["app", "modal", "popover", "overlay", "max"];

/// Selector the dark-scheme overrides hang off. The preset's `darkMode`
/// descriptor and the emitted dark block must agree on this string.
pub const DARK_SCHEME_SELECTOR: &str = r#"[data-tailor-color-scheme="dark"]"#;

/// Fixed semantic color names not derived from the palette.
pub const SEMANTIC_COLOR_NAMES: [&str; 14] = [
    "white",
    "black",
    "text",
    "body",
    "error",
    "placeholder",
    "anchor",
    "default",
    "default-hover",
    "default-color",
    "default-border",
    "disabled",
    "disabled-color",
    "disabled-border",
];
