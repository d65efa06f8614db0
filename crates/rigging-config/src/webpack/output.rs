use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Source-map policy. Serializes to the tool name or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
    InlineSourceMap,
    Disabled,
}

impl Devtool {
    pub fn is_enabled(self) -> bool {
        self != Devtool::Disabled
    }
}

impl Serialize for Devtool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Devtool::InlineSourceMap => serializer.serialize_str("inline-source-map"),
            Devtool::Disabled => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub minimize: bool,
    pub minimizer: Vec<Minimizer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum Minimizer {
    #[serde(rename = "terser-webpack-plugin")]
    Terser(TerserOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerserOptions {
    pub parallel: bool,
    pub extract_comments: bool,
}

impl Default for TerserOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            extract_comments: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    pub extensions: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: [".tsx", ".ts", ".js"].map(String::from).to_vec(),
        }
    }
}

/// Emission policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Absolute output directory
    pub path: PathBuf,
    pub public_path: String,
    pub filename: String,
    pub chunk_filename: String,
    /// Naming template for files emitted as `asset/resource` modules
    pub asset_module_filename: String,
    pub devtool_module_filename_template: String,
    pub hash_function: String,
    pub hash_digest: String,
    pub hash_digest_length: usize,
}
