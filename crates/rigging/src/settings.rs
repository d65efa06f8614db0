//! Descriptor defaulting.
//!
//! [`ResolvedSettings::resolve`] applies every default up front so the rule
//! and plugin builders never look at raw descriptor fields.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rigging_config::{
    CssMode, Entry, HtmlSetting, MarkupMinify, Mode, Project, DEFAULT_NAMESPACE,
};
use serde_json::Value;

use crate::error::{Result, SynthError};
use crate::paths::{resolve_dest, resolve_root};

/// Loader-request separator; never valid inside a template path.
pub const TEMPLATE_DELIMITER: char = '!';

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub mode: Mode,
    pub root_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub title: String,
    pub entry: Entry,
    /// CSS Modules identifier prefix; `None` when scoping is disabled
    pub css_namespace: Option<String>,
    /// Emit styles as separate files instead of injecting them from scripts
    pub extract_css: bool,
    /// Markup generation; `None` when disabled
    pub html: Option<ResolvedHtml>,
    /// Global constants as JSON literal source text
    pub define: IndexMap<String, String>,
    /// Single minifier configuration for generated pages and markup assets
    pub markup_minify: MarkupMinify,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedHtml {
    pub template: Option<String>,
    pub template_parameters: Option<Value>,
}

impl ResolvedSettings {
    pub fn resolve(project: &Project, mode: Mode, caller: Option<&Path>) -> Result<Self> {
        let root_dir = resolve_root(project.root_dir.as_deref(), caller)?;
        let dest_dir = resolve_dest(&root_dir, project.dest_dir.as_deref());
        let html = resolve_html(project.html.as_ref())?;
        let define = serialize_defines(&project.define);

        if !mode.is_production() && project.css.mode.is_some() {
            tracing::debug!(css_mode = ?project.css.mode, "css.mode ignored in development");
        }

        Ok(Self {
            mode,
            root_dir,
            dest_dir,
            title: project.title.clone(),
            entry: project.entry.clone().unwrap_or_default(),
            css_namespace: css_namespace(project),
            extract_css: extract_css(mode, project.css.mode),
            html,
            define,
            markup_minify: MarkupMinify::default(),
        })
    }
}

/// Strip the bracket characters a class-name template would interpret.
pub fn sanitize_namespace(namespace: &str) -> String {
    namespace.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

pub fn css_namespace(project: &Project) -> Option<String> {
    let modules = project.css.modules.as_ref();
    if modules.is_some_and(|m| m.is_disabled()) {
        return None;
    }

    let namespace = modules
        .and_then(|m| m.namespace())
        .or(project.vendor.as_deref())
        .unwrap_or(DEFAULT_NAMESPACE);
    Some(sanitize_namespace(namespace))
}

/// Development always embeds styles; production extracts unless told otherwise.
pub fn extract_css(mode: Mode, css_mode: Option<CssMode>) -> bool {
    mode.is_production() && matches!(css_mode, None | Some(CssMode::LoadFromHtml))
}

fn resolve_html(setting: Option<&HtmlSetting>) -> Result<Option<ResolvedHtml>> {
    let setting = setting.cloned().unwrap_or_default();
    if !setting.is_enabled() {
        return Ok(None);
    }

    let Some(options) = setting.options() else {
        return Ok(Some(ResolvedHtml::default()));
    };

    if let Some(template) = &options.template {
        if template.contains(TEMPLATE_DELIMITER) {
            return Err(SynthError::InvalidTemplate {
                template: template.clone(),
                delimiter: TEMPLATE_DELIMITER,
            });
        }
    }

    Ok(Some(ResolvedHtml {
        template: options.template.clone(),
        template_parameters: options.template_parameters.clone(),
    }))
}

/// Render each value as JSON source text. Values were validated when they
/// entered the descriptor, so this cannot fail.
fn serialize_defines(define: &IndexMap<String, Value>) -> IndexMap<String, String> {
    define
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect()
}
