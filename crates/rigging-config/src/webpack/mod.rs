//! Low-level configuration consumed by the bundling engine.
//!
//! Everything here serializes to the engine's camelCase configuration
//! schema. Regex-valued fields (`test`, `exclude`) carry the pattern source.

mod output;
mod plugin;
mod rule;

use serde::Serialize;
use std::path::PathBuf;

pub use output::{Devtool, Minimizer, Optimization, OutputConfig, ResolveConfig, TerserOptions};
pub use plugin::{
    CleanOptions, CssExtractOptions, HtmlPluginOptions, MarkupMinify, Plugin, PluginKind,
};
pub use rule::{AssetClass, AssetRule, Stage, StageKind};

use crate::env::Mode;
use crate::error::{ConfigError, Result};
use crate::project::Entry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub rules: Vec<AssetRule>,
}

/// Fully synthesized build configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub mode: Mode,
    /// Absolute project root
    pub context: PathBuf,
    pub entry: Entry,
    pub module: ModuleConfig,
    pub resolve: ResolveConfig,
    pub devtool: Devtool,
    pub optimization: Optimization,
    pub plugins: Vec<Plugin>,
    pub output: OutputConfig,
}

impl BuildConfiguration {
    pub fn rules(&self) -> &[AssetRule] {
        &self.module.rules
    }

    pub fn rule(&self, class: AssetClass) -> Option<&AssetRule> {
        self.module.rules.iter().find(|rule| rule.class == class)
    }

    /// First rule whose pattern accepts `path`, as the engine would pick it.
    pub fn rule_for(&self, path: &str) -> Option<&AssetRule> {
        self.module.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn plugin(&self, kind: PluginKind) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.kind() == kind)
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugin(kind).is_some()
    }

    pub fn plugin_kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(Plugin::kind).collect()
    }

    /// Render in the engine's configuration schema.
    ///
    /// Rule `test` and `exclude` are regex sources. The engine reads a plain
    /// string condition as an absolute path prefix, so a host must wrap both
    /// in `RegExp` before handing the result over.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("configuration", e))
    }
}
