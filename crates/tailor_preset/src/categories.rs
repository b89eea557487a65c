//! Category assembly
//!
//! One assembler serves all five output categories; a category is nothing
//! but a fixed semantic table applied next to the palette expansion. Fixed
//! entries go in first, palette-derived entries after, so a palette color
//! that reuses a fixed name wins.

use indexmap::IndexMap;
use serde::Serialize;
use tailor_theme::Palette;

use crate::expand;
use crate::vars::{semantic_var, ColorFormat};

/// One entry in a category color map: a full shade ramp or a flat
/// reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Ramp(IndexMap<String, String>),
    Reference(String),
}

/// Fixed semantic entries of one category: `(utility key, semantic name)`.
pub type FixedTable = &'static [(&'static str, &'static str)];

/// Shared by the text and placeholder categories.
pub const TEXT_TABLE: FixedTable = &[
    ("white", "white"),
    ("black", "black"),
    ("body", "text"),
    ("error", "error"),
    ("placeholder", "placeholder"),
    ("anchor", "anchor"),
    ("DEFAULT", "default-color"),
];

/// The background category alone carries `hover`; hover states only apply
/// to interactive surfaces, not to the text and border families.
pub const BACKGROUND_TABLE: FixedTable = &[
    ("white", "white"),
    ("black", "black"),
    ("body", "body"),
    ("error", "error"),
    ("placeholder", "placeholder"),
    ("anchor", "anchor"),
    ("DEFAULT", "default"),
    ("hover", "default-hover"),
];

/// Shared by the ring, divide and border categories.
pub const BORDER_TABLE: FixedTable = &[("DEFAULT", "default-border")];

/// Assemble one category color map.
pub fn color_category(
    palette: &Palette,
    fixed: FixedTable,
    format: ColorFormat,
) -> IndexMap<String, ColorEntry> {
    let mut out = IndexMap::new();
    for (key, semantic) in fixed {
        out.insert(
            (*key).to_string(),
            ColorEntry::Reference(format.reference(&semantic_var(semantic))),
        );
    }
    for name in palette.keys() {
        out.insert(name.clone(), ColorEntry::Ramp(expand::ramp(name, format)));
    }
    out.insert("primary".to_string(), ColorEntry::Ramp(expand::primary_ramp(format)));
    for name in palette.keys() {
        for (key, value) in expand::variant_aliases(name, format) {
            out.insert(key, ColorEntry::Reference(value));
        }
    }
    for (key, value) in expand::primary_variant_aliases(format) {
        out.insert(key, ColorEntry::Reference(value));
    }
    out
}
