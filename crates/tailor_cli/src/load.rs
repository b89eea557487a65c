//! Theme file loading
//!
//! A theme document is either the theme itself or wraps it under `theme`,
//! `default`, or `default.theme` (files converted from other tooling keep
//! such wrapper shapes). Extraction strategies are probed in order; the
//! first object carrying a recognized theme field wins.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tailor_theme::ThemeOverride;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("no theme found in {path} (checked the document root, `theme`, `default`, and `default.theme`)")]
    NoTheme { path: String },
}

/// Extraction strategies, probed in order.
const STRATEGIES: [(&str, fn(&Value) -> Option<&Value>); 4] = [
    ("root", |doc| Some(doc)),
    ("theme", |doc| doc.get("theme")),
    ("default", |doc| doc.get("default")),
    ("default.theme", |doc| doc.get("default").and_then(|d| d.get("theme"))),
];

/// Read and extract the theme overrides from `path`.
pub fn load_theme(path: &Path) -> Result<ThemeOverride, LoadError> {
    let path_str = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path_str.clone(),
        source,
    })?;
    let doc = parse_document(path, &text)?;

    let candidate = STRATEGIES
        .iter()
        .find_map(|&(strategy, extract)| {
            let value = extract(&doc)?;
            if is_theme_object(value) {
                tracing::debug!(strategy, path = %path_str, "theme located");
                Some(value)
            } else {
                None
            }
        })
        .ok_or_else(|| LoadError::NoTheme { path: path_str.clone() })?;

    serde_json::from_value(candidate.clone()).map_err(|e| LoadError::Parse {
        path: path_str,
        message: e.to_string(),
    })
}

/// Parse by extension; unknown extensions try TOML first, then JSON.
fn parse_document(path: &Path, text: &str) -> Result<Value, LoadError> {
    let parse_err = |message: String| LoadError::Parse {
        path: path.display().to_string(),
        message,
    };
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(text).map_err(|e| parse_err(e.to_string())),
        Some("toml") => toml_document(text).map_err(parse_err),
        _ => toml_document(text)
            .or_else(|toml_err| {
                serde_json::from_str(text)
                    .map_err(|json_err| format!("not TOML ({toml_err}) nor JSON ({json_err})"))
            })
            .map_err(parse_err),
    }
}

fn toml_document(text: &str) -> Result<Value, String> {
    let value: toml::Value = toml::from_str(text).map_err(|e| e.to_string())?;
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// A candidate counts only if it is a map with at least one recognized
/// theme field; that is what lets wrapper-shaped documents fall through the
/// root strategy.
fn is_theme_object(value: &Value) -> bool {
    match value.as_object() {
        Some(map) => ThemeOverride::FIELDS.iter().any(|field| map.contains_key(*field)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tailor-load-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_theme_from_document_root() {
        let path = write_temp("root.toml", "primary_color = \"teal\"\n");
        let over = load_theme(&path).unwrap();
        assert_eq!(over.primary_color.as_deref(), Some("teal"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn probes_wrapper_shapes_in_order() {
        let path = write_temp(
            "wrapped.json",
            r#"{ "default": { "theme": { "primaryColor": "grape" } } }"#,
        );
        let over = load_theme(&path).unwrap();
        assert_eq!(over.primary_color.as_deref(), Some("grape"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn direct_theme_key_beats_default_theme() {
        let path = write_temp(
            "both.json",
            r#"{
                "theme": { "primaryColor": "lime" },
                "default": { "theme": { "primaryColor": "grape" } }
            }"#,
        );
        let over = load_theme(&path).unwrap();
        assert_eq!(over.primary_color.as_deref(), Some("lime"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn unrecognized_document_is_no_theme() {
        let path = write_temp("other.toml", "[package]\nname = \"nope\"\n");
        assert!(matches!(load_theme(&path), Err(LoadError::NoTheme { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_io() {
        let path = Path::new("/nonexistent/tailor-theme.toml");
        assert!(matches!(load_theme(path), Err(LoadError::Io { .. })));
    }

    #[test]
    fn malformed_document_is_parse() {
        let path = write_temp("broken.toml", "primary_color = \n");
        assert!(matches!(load_theme(&path), Err(LoadError::Parse { .. })));
        fs::remove_file(path).ok();
    }
}
