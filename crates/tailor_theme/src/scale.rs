//! Fixed-shape token scales
//!
//! Every scale here has a closed key set, so overrides merge field by field
//! and the merged theme can never lose a key.

use serde::{Deserialize, Serialize};

/// A five-step size scale (`xs`..`xl`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeScale {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl SizeScale {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries().into_iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn merged(&self, over: &SizeScaleOverride) -> SizeScale {
        SizeScale {
            xs: over.xs.clone().unwrap_or_else(|| self.xs.clone()),
            sm: over.sm.clone().unwrap_or_else(|| self.sm.clone()),
            md: over.md.clone().unwrap_or_else(|| self.md.clone()),
            lg: over.lg.clone().unwrap_or_else(|| self.lg.clone()),
            xl: over.xl.clone().unwrap_or_else(|| self.xl.clone()),
        }
    }
}

/// Partial five-step scale as it appears in a user theme file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SizeScaleOverride {
    pub xs: Option<String>,
    pub sm: Option<String>,
    pub md: Option<String>,
    pub lg: Option<String>,
    pub xl: Option<String>,
}

/// One heading level of the typography scale.
///
/// `font_weight` falls back to [`Headings::font_weight`] when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub font_size: String,
    pub line_height: String,
    #[serde(default)]
    pub font_weight: Option<String>,
}

/// The h1-h6 typography table plus the shared heading defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub font_weight: String,
    pub line_height: String,
    pub h1: Heading,
    pub h2: Heading,
    pub h3: Heading,
    pub h4: Heading,
    pub h5: Heading,
    pub h6: Heading,
}

impl Headings {
    pub fn levels(&self) -> [(&'static str, &Heading); 6] {
        [
            ("h1", &self.h1),
            ("h2", &self.h2),
            ("h3", &self.h3),
            ("h4", &self.h4),
            ("h5", &self.h5),
            ("h6", &self.h6),
        ]
    }

    /// Effective font weight of one level.
    pub fn weight_of<'a>(&'a self, heading: &'a Heading) -> &'a str {
        heading.font_weight.as_deref().unwrap_or(&self.font_weight)
    }

    pub fn merged(&self, over: &HeadingsOverride) -> Headings {
        let level = |base: &Heading, over: &Option<HeadingOverride>| match over {
            Some(o) => Heading {
                font_size: o.font_size.clone().unwrap_or_else(|| base.font_size.clone()),
                line_height: o.line_height.clone().unwrap_or_else(|| base.line_height.clone()),
                font_weight: o.font_weight.clone().or_else(|| base.font_weight.clone()),
            },
            None => base.clone(),
        };
        Headings {
            font_weight: over.font_weight.clone().unwrap_or_else(|| self.font_weight.clone()),
            line_height: over.line_height.clone().unwrap_or_else(|| self.line_height.clone()),
            h1: level(&self.h1, &over.h1),
            h2: level(&self.h2, &over.h2),
            h3: level(&self.h3, &over.h3),
            h4: level(&self.h4, &over.h4),
            h5: level(&self.h5, &over.h5),
            h6: level(&self.h6, &over.h6),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingOverride {
    pub font_size: Option<String>,
    pub line_height: Option<String>,
    pub font_weight: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingsOverride {
    pub font_weight: Option<String>,
    pub line_height: Option<String>,
    pub h1: Option<HeadingOverride>,
    pub h2: Option<HeadingOverride>,
    pub h3: Option<HeadingOverride>,
    pub h4: Option<HeadingOverride>,
    pub h5: Option<HeadingOverride>,
    pub h6: Option<HeadingOverride>,
}

/// Stacking-layer values, lowest to highest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZIndexScale {
    pub app: String,
    pub modal: String,
    pub popover: String,
    pub overlay: String,
    pub max: String,
}

impl ZIndexScale {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("app", self.app.as_str()),
            ("modal", self.modal.as_str()),
            ("popover", self.popover.as_str()),
            ("overlay", self.overlay.as_str()),
            ("max", self.max.as_str()),
        ]
    }

    pub fn merged(&self, over: &ZIndexOverride) -> ZIndexScale {
        ZIndexScale {
            app: over.app.clone().unwrap_or_else(|| self.app.clone()),
            modal: over.modal.clone().unwrap_or_else(|| self.modal.clone()),
            popover: over.popover.clone().unwrap_or_else(|| self.popover.clone()),
            overlay: over.overlay.clone().unwrap_or_else(|| self.overlay.clone()),
            max: over.max.clone().unwrap_or_else(|| self.max.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ZIndexOverride {
    pub app: Option<String>,
    pub modal: Option<String>,
    pub popover: Option<String>,
    pub overlay: Option<String>,
    pub max: Option<String>,
}
