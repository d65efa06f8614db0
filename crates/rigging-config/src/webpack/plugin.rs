use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::helpers::DEFAULT_INJECT;

/// Build-time plugins, serialized as `{ "plugin": <package>, "options": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum Plugin {
    #[serde(rename = "clean-webpack-plugin")]
    Clean(CleanOptions),

    /// Global constants; values are JSON literal source text
    #[serde(rename = "webpack.DefinePlugin")]
    Define(IndexMap<String, String>),

    #[serde(rename = "mini-css-extract-plugin")]
    CssExtract(CssExtractOptions),

    #[serde(rename = "html-webpack-plugin")]
    Html(HtmlPluginOptions),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Clean,
    Define,
    CssExtract,
    Html,
}

impl Plugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::Clean(_) => PluginKind::Clean,
            Plugin::Define(_) => PluginKind::Define,
            Plugin::CssExtract(_) => PluginKind::CssExtract,
            Plugin::Html(_) => PluginKind::Html,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanOptions {
    /// Directory to wipe before emitting
    pub path: PathBuf,
    /// Root the cleanup is confined to
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssExtractOptions {
    pub filename: String,
    pub chunk_filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPluginOptions {
    pub title: String,
    pub inject: String,
    pub minify: MarkupMinify,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_parameters: Option<Value>,
}

impl HtmlPluginOptions {
    pub fn new(title: impl Into<String>, minify: MarkupMinify) -> Self {
        Self {
            title: title.into(),
            inject: DEFAULT_INJECT.to_string(),
            minify,
            template: None,
            template_parameters: None,
        }
    }
}

/// Markup minifier switches, shared by generated pages and markup assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupMinify {
    pub collapse_boolean_attributes: bool,
    pub collapse_whitespace: bool,
    pub decode_entities: bool,
    pub remove_attribute_quotes: bool,
    pub remove_comments: bool,
    pub remove_optional_tags: bool,
    pub remove_redundant_attributes: bool,
    pub remove_script_type_attributes: bool,
    pub remove_style_link_type_attributes: bool,
    pub sort_attributes: bool,
    pub sort_class_name: bool,
    pub use_short_doctype: bool,
}

impl Default for MarkupMinify {
    fn default() -> Self {
        Self {
            collapse_boolean_attributes: true,
            collapse_whitespace: true,
            decode_entities: true,
            remove_attribute_quotes: true,
            remove_comments: true,
            remove_optional_tags: true,
            remove_redundant_attributes: true,
            remove_script_type_attributes: true,
            remove_style_link_type_attributes: true,
            sort_attributes: true,
            sort_class_name: true,
            use_short_doctype: true,
        }
    }
}
