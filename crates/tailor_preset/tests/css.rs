//! Cross-component invariant: every variable the preset references must be
//! declared by the stylesheet emitted for the same theme.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tailor_preset::{base_styles, stylesheet, Preset};
use tailor_theme::{ColorScale, ThemeOverride};

/// Collect `--tailor-*` names referenced as `var(...)` anywhere in `text`.
fn referenced_vars(text: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let mut rest = text;
    while let Some(pos) = rest.find("var(--tailor") {
        let tail = &rest[pos + "var(".len()..];
        let name: String = tail
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        out.insert(name);
        rest = &rest[pos + "var(".len()..];
    }
    out
}

/// Collect `--tailor-*` names declared at the start of a line in `css`.
fn declared_vars(css: &str) -> BTreeSet<String> {
    css.lines()
        .filter_map(|line| {
            let line = line.trim_start();
            if !line.starts_with("--tailor") {
                return None;
            }
            line.split(':').next().map(str::to_string)
        })
        .collect()
}

fn overrides_with_custom_colors() -> ThemeOverride {
    let mut colors = IndexMap::new();
    colors.insert(
        "deep-red".to_string(),
        ColorScale::new((0..10).map(|i| format!("#9e041{i}")).collect()),
    );
    colors.insert(
        "white".to_string(),
        ColorScale::new((0..10).map(|i| format!("#fafaf{i}")).collect()),
    );
    ThemeOverride {
        colors: Some(colors),
        primary_color: Some("deep-red".to_string()),
        ..ThemeOverride::default()
    }
}

#[test]
fn every_preset_reference_resolves_for_the_default_theme() {
    let preset = Preset::generate(None).unwrap();
    let css = stylesheet(None).unwrap();
    assert_no_dangling(&preset, &css);
}

#[test]
fn every_preset_reference_resolves_for_a_customized_theme() {
    let over = overrides_with_custom_colors();
    let preset = Preset::generate(Some(&over)).unwrap();
    let css = stylesheet(Some(&over)).unwrap();
    assert_no_dangling(&preset, &css);
}

#[test]
fn stylesheet_references_resolve_internally() {
    let css = stylesheet(None).unwrap();
    let declared = declared_vars(&css);
    for name in referenced_vars(&css) {
        assert!(declared.contains(&name), "stylesheet references undeclared {name}");
    }
}

#[test]
fn base_styles_precede_and_resolve_against_the_stylesheet() {
    let css = stylesheet(None).unwrap();
    let declared = declared_vars(&css);
    for name in referenced_vars(base_styles()) {
        assert!(declared.contains(&name), "base styles reference undeclared {name}");
    }
}

fn assert_no_dangling(preset: &Preset, css: &str) {
    let json = serde_json::to_string(preset).unwrap();
    let referenced = referenced_vars(&json);
    let declared = declared_vars(css);

    // Sanity: the scan actually found the interesting namespaces.
    assert!(referenced.iter().any(|n| n.starts_with("--tailor-color-")));
    assert!(referenced.iter().any(|n| n.starts_with("--tailor-primary-color-")));
    assert!(referenced.iter().any(|n| n.starts_with("--tailor-h1-")));

    for name in &referenced {
        assert!(declared.contains(name), "preset references undeclared {name}");
    }
}
