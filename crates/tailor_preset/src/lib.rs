//! Tailor compiler core
//!
//! Turns a merged theme into two artifacts that must stay in lockstep:
//!
//! - [`Preset`]: the build-time configuration fragment a utility-class
//!   generator consumes (`bg-primary-500`, `text-error`, ... mapped onto
//!   custom properties).
//! - [`stylesheet`]: the runtime block of `--tailor-*` declarations those
//!   references resolve against.
//!
//! Both artifacts are pure functions of the merged theme: no I/O, no
//! retained state, structurally identical output on every call.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tailor_preset::{stylesheet, Preset};
//!
//! let css = stylesheet(Some(&overrides))?;
//! let preset = Preset::generate(Some(&overrides))?;
//! let json = serde_json::to_string_pretty(&preset)?;
//! ```

pub mod categories;
pub mod config;
pub mod css;
pub mod expand;
pub mod names;
pub mod vars;

pub use categories::ColorEntry;
pub use config::{Extend, Preset, ThemeSection};
pub use css::{base_styles, stylesheet, stylesheet_for};
pub use vars::ColorFormat;
