//! Color expansion engine
//!
//! Expands one palette entry into its shade ramp and interaction-state
//! aliases. This is name generation only: shade values live in the emitted
//! stylesheet, the preset stores references into it.

use indexmap::IndexMap;

use crate::names::{RAMP_STEPS, VARIANT_SUFFIXES};
use crate::vars::{color_var, color_variant_var, primary_var, primary_variant_var, ColorFormat};

/// Step keys `50`..`900` mapped from shade indices 0..9, plus a `DEFAULT`
/// entry pointing at the filled variant.
pub fn ramp(name: &str, format: ColorFormat) -> IndexMap<String, String> {
    let mut out = IndexMap::with_capacity(RAMP_STEPS.len() + 1);
    for (step, shade) in RAMP_STEPS {
        out.insert(step.to_string(), format.reference(&color_var(name, shade)));
    }
    out.insert(
        "DEFAULT".to_string(),
        format.reference(&color_variant_var(name, "filled")),
    );
    out
}

/// The ramp shape keyed under the `primary` alias.
pub fn primary_ramp(format: ColorFormat) -> IndexMap<String, String> {
    let mut out = IndexMap::with_capacity(RAMP_STEPS.len() + 1);
    for (step, shade) in RAMP_STEPS {
        out.insert(step.to_string(), format.reference(&primary_var(shade)));
    }
    out.insert(
        "DEFAULT".to_string(),
        format.reference(&primary_variant_var("filled")),
    );
    out
}

/// Seven flat `{name}-{variant}` aliases. Pure name formatting, total for
/// any color name.
pub fn variant_aliases(name: &str, format: ColorFormat) -> IndexMap<String, String> {
    VARIANT_SUFFIXES
        .iter()
        .map(|variant| {
            (
                format!("{name}-{variant}"),
                format.reference(&color_variant_var(name, variant)),
            )
        })
        .collect()
}

/// The variant aliases keyed under `primary-*`.
pub fn primary_variant_aliases(format: ColorFormat) -> IndexMap<String, String> {
    VARIANT_SUFFIXES
        .iter()
        .map(|variant| {
            (
                format!("primary-{variant}"),
                format.reference(&primary_variant_var(variant)),
            )
        })
        .collect()
}
