//! Bundler configuration synthesis.
//!
//! rigging turns a small [`Project`] descriptor into a complete
//! [`BuildConfiguration`] for either build mode:
//!
//! ```text
//! env ─ normalize ─ mode ─┐
//!                         ├─ settings ─┬─ rules ───┐
//! ProjectSource ──────────┘            ├─ plugins ─┼─ compose ─ customize
//!                                      └─ output ──┘
//! ```
//!
//! # Example
//!
//! ```
//! use rigging::{Project, PluginKind, Synthesizer};
//! use serde_json::json;
//!
//! let synth = Synthesizer::new(Project::new("Demo").with_root_dir("/srv/demo"));
//!
//! let dev = synth.synthesize(&json!({})).unwrap();
//! assert!(!dev.has_plugin(PluginKind::Clean));
//!
//! let prod = synth.synthesize(&json!({ "production": true })).unwrap();
//! assert!(prod.has_plugin(PluginKind::Clean));
//! assert!(prod.has_plugin(PluginKind::CssExtract));
//! ```

pub mod declarations;
pub mod error;
pub mod paths;
pub mod plugins;
pub mod rules;
pub mod settings;
mod synth;

#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Result, SynthError};
pub use settings::{ResolvedHtml, ResolvedSettings};
pub use synth::{apply_customize, compose, configure, Synthesizer};

// Descriptor and configuration types
pub use rigging_config::*;
