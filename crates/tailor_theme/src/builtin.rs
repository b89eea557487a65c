//! Built-in default theme
//!
//! The palette is the Open Color scale set, ten shades per color, lightest
//! (0) to darkest (9). Everything here is plain const data assembled into a
//! [`Theme`] value on demand; there is no process-wide theme singleton.

use crate::palette::{ColorScale, Palette, SHADE_COUNT};
use crate::scale::{Heading, Headings, SizeScale, ZIndexScale};
use crate::theme::Theme;

/// Default shade scales.
pub mod shades {
    pub const DARK: [&str; 10] = [
        "#C1C2C5", "#A6A7AB", "#909296", "#5c5f66", "#373A40", "#2C2E33", "#25262b", "#1A1B1E",
        "#141517", "#101113",
    ];
    pub const GRAY: [&str; 10] = [
        "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96", "#495057",
        "#343a40", "#212529",
    ];
    pub const RED: [&str; 10] = [
        "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252", "#f03e3e",
        "#e03131", "#c92a2a",
    ];
    pub const PINK: [&str; 10] = [
        "#fff0f6", "#ffdeeb", "#fcc2d7", "#faa2c1", "#f783ac", "#f06595", "#e64980", "#d6336c",
        "#c2255c", "#a61e4d",
    ];
    pub const GRAPE: [&str; 10] = [
        "#f8f0fc", "#f3d9fa", "#eebefa", "#e599f7", "#da77f2", "#cc5de8", "#be4bdb", "#ae3ec9",
        "#9c36b5", "#862e9c",
    ];
    pub const VIOLET: [&str; 10] = [
        "#f3f0ff", "#e5dbff", "#d0bfff", "#b197fc", "#9775fa", "#845ef7", "#7950f2", "#7048e8",
        "#6741d9", "#5f3dc4",
    ];
    pub const INDIGO: [&str; 10] = [
        "#edf2ff", "#dbe4ff", "#bac8ff", "#91a7ff", "#748ffc", "#5c7cfa", "#4c6ef5", "#4263eb",
        "#3b5bdb", "#364fc6",
    ];
    pub const BLUE: [&str; 10] = [
        "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6", "#1c7ed6",
        "#1971c2", "#1864ab",
    ];
    pub const CYAN: [&str; 10] = [
        "#e3fafc", "#c5f6fa", "#99e9f2", "#66d9e8", "#3bc9db", "#22b8cf", "#15aabf", "#1098ad",
        "#0c8599", "#0b7285",
    ];
    pub const GREEN: [&str; 10] = [
        "#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c", "#51cf66", "#40c057", "#37b24d",
        "#2f9e44", "#2b8a3e",
    ];
    pub const LIME: [&str; 10] = [
        "#f4fce3", "#e9fac8", "#d8f5a2", "#c0eb75", "#a9e34b", "#94d82d", "#82c91e", "#74b816",
        "#66a80f", "#5c940d",
    ];
    pub const YELLOW: [&str; 10] = [
        "#fff9db", "#fff3bf", "#ffec99", "#ffe066", "#ffd43b", "#fcc419", "#fab005", "#f59f00",
        "#f08c00", "#e67700",
    ];
    pub const ORANGE: [&str; 10] = [
        "#fff4e6", "#ffe8cc", "#ffd8a8", "#ffc078", "#ffa94d", "#ff922b", "#fd7e14", "#f76707",
        "#e8590c", "#d9480f",
    ];
    pub const TEAL: [&str; 10] = [
        "#e6fcf5", "#c3fae8", "#96f2d7", "#63e6be", "#38d9a9", "#20c997", "#12b886", "#0ca678",
        "#099268", "#087f5b",
    ];
}

/// Palette entries in emission order.
const PALETTE: [(&str, [&str; SHADE_COUNT]); 14] = [
    ("dark", shades::DARK),
    ("gray", shades::GRAY),
    ("red", shades::RED),
    ("pink", shades::PINK),
    ("grape", shades::GRAPE),
    ("violet", shades::VIOLET),
    ("indigo", shades::INDIGO),
    ("blue", shades::BLUE),
    ("cyan", shades::CYAN),
    ("green", shades::GREEN),
    ("lime", shades::LIME),
    ("yellow", shades::YELLOW),
    ("orange", shades::ORANGE),
    ("teal", shades::TEAL),
];

pub fn default_palette() -> Palette {
    PALETTE
        .into_iter()
        .map(|(name, scale)| (name.to_string(), ColorScale::from(scale)))
        .collect()
}

pub(crate) fn default_theme() -> Theme {
    Theme {
        colors: default_palette(),
        primary_color: "blue".to_string(),
        primary_shade: 6,
        default_radius: "sm".to_string(),
        font_family: "-apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, Arial, \
                      sans-serif, Apple Color Emoji, Segoe UI Emoji"
            .to_string(),
        font_family_monospace: "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \
                                Liberation Mono, Courier New, monospace"
            .to_string(),
        font_family_headings: "-apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, \
                               Arial, sans-serif, Apple Color Emoji, Segoe UI Emoji"
            .to_string(),
        breakpoints: SizeScale {
            xs: "36em".into(),
            sm: "48em".into(),
            md: "62em".into(),
            lg: "75em".into(),
            xl: "88em".into(),
        },
        font_sizes: SizeScale {
            xs: "0.75rem".into(),
            sm: "0.875rem".into(),
            md: "1rem".into(),
            lg: "1.125rem".into(),
            xl: "1.25rem".into(),
        },
        line_heights: SizeScale {
            xs: "1.4".into(),
            sm: "1.45".into(),
            md: "1.55".into(),
            lg: "1.6".into(),
            xl: "1.65".into(),
        },
        headings: Headings {
            font_weight: "700".into(),
            line_height: "1.2".into(),
            h1: Heading { font_size: "2.125rem".into(), line_height: "1.3".into(), font_weight: None },
            h2: Heading { font_size: "1.625rem".into(), line_height: "1.35".into(), font_weight: None },
            h3: Heading { font_size: "1.375rem".into(), line_height: "1.4".into(), font_weight: None },
            h4: Heading { font_size: "1.125rem".into(), line_height: "1.45".into(), font_weight: None },
            h5: Heading { font_size: "1rem".into(), line_height: "1.5".into(), font_weight: None },
            h6: Heading { font_size: "0.875rem".into(), line_height: "1.5".into(), font_weight: None },
        },
        spacing: SizeScale {
            xs: "0.625rem".into(),
            sm: "0.75rem".into(),
            md: "1rem".into(),
            lg: "1.25rem".into(),
            xl: "2rem".into(),
        },
        shadows: SizeScale {
            xs: "0 1px 3px rgba(0, 0, 0, 0.05), 0 1px 2px rgba(0, 0, 0, 0.1)".into(),
            sm: "0 1px 3px rgba(0, 0, 0, 0.05), rgba(0, 0, 0, 0.05) 0 10px 15px -5px, \
                 rgba(0, 0, 0, 0.04) 0 7px 7px -5px"
                .into(),
            md: "0 1px 3px rgba(0, 0, 0, 0.05), rgba(0, 0, 0, 0.05) 0 20px 25px -5px, \
                 rgba(0, 0, 0, 0.04) 0 10px 10px -5px"
                .into(),
            lg: "0 1px 3px rgba(0, 0, 0, 0.05), rgba(0, 0, 0, 0.05) 0 28px 23px -7px, \
                 rgba(0, 0, 0, 0.04) 0 12px 12px -7px"
                .into(),
            xl: "0 1px 3px rgba(0, 0, 0, 0.05), rgba(0, 0, 0, 0.05) 0 36px 28px -7px, \
                 rgba(0, 0, 0, 0.04) 0 17px 17px -7px"
                .into(),
        },
        radii: SizeScale {
            xs: "0.125rem".into(),
            sm: "0.25rem".into(),
            md: "0.5rem".into(),
            lg: "1rem".into(),
            xl: "2rem".into(),
        },
        z_index: ZIndexScale {
            app: "100".into(),
            modal: "200".into(),
            popover: "300".into(),
            overlay: "400".into(),
            max: "9999".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn default_theme_is_valid() {
        default_theme().validate().expect("built-in theme must validate");
    }

    #[test]
    fn palette_has_fourteen_full_scales_of_parseable_hex() {
        let palette = default_palette();
        assert_eq!(palette.len(), 14);
        for (name, scale) in &palette {
            assert_eq!(scale.len(), SHADE_COUNT, "scale {name}");
            for shade in scale.shades() {
                Rgb::from_hex(shade).unwrap_or_else(|_| panic!("{name}: bad shade {shade}"));
            }
        }
    }

    #[test]
    fn semantic_anchors_exist() {
        // The emitter's semantic colors reference these scales by name.
        let palette = default_palette();
        for name in ["dark", "gray", "red"] {
            assert!(palette.contains_key(name));
        }
    }
}
